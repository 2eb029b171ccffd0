//! Built-in meme templates.
//!
//! Six featured templates are always offered; the rest sit behind the
//! host's "show more" toggle.

#[cfg(test)]
#[path = "templates_test.rs"]
mod templates_test;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Template {
    pub id: u32,
    pub name: &'static str,
    pub url: &'static str,
}

const fn template(id: u32, name: &'static str, url: &'static str) -> Template {
    Template { id, name, url }
}

pub static FEATURED: [Template; 6] = [
    template(1, "Drake", "https://i.imgflip.com/30b1gx.jpg"),
    template(2, "Surprised Pikachu", "https://i.imgflip.com/26am.jpg"),
    template(3, "Success Kid", "https://i.imgflip.com/1bij.jpg"),
    template(4, "Woman Yelling at Cat", "https://i.imgflip.com/4t0m5.jpg"),
    template(5, "Distracted Boyfriend", "https://i.imgflip.com/1g8my4.jpg"),
    template(6, "Bernie Sanders", "https://i.imgflip.com/2/345v97.jpg"),
];

pub static MORE: [Template; 14] = [
    template(8, "Mocking SpongeBob", "https://i.imgflip.com/2fm6x.jpg"),
    template(9, "Trump Signing", "https://i.imgflip.com/1otk96.jpg"),
    template(10, "Bernie I Am Once Again", "https://i.imgflip.com/3lmzyx.jpg"),
    template(11, "Third World Skeptical Kid", "https://i.imgflip.com/23ls.jpg"),
    template(12, "Bad Luck Brian", "https://i.imgflip.com/92.jpg"),
    template(13, "Expanding Brain", "https://i.imgflip.com/1ihzfe.jpg"),
    template(14, "Overly Attached Girlfriend", "https://i.imgflip.com/9ehk.jpg"),
    template(16, "Y U No", "https://i.imgflip.com/9vct.jpg"),
    template(17, "Spider-Man Pointing", "https://i.imgflip.com/1ur9b0.jpg"),
    template(18, "Leonardo DiCaprio Cheers", "https://i.imgflip.com/1c1uej.jpg"),
    template(20, "Matrix Morpheus", "https://i.imgflip.com/4/2cp1.jpg"),
    template(22, "They're The Same Picture", "https://i.imgflip.com/2kbn1e.jpg"),
    template(25, "American Chopper Argument", "https://i.imgflip.com/1b42wl.jpg"),
    template(26, "Batman Slapping Robin", "https://i.imgflip.com/24y43o.jpg"),
];

/// Templates to offer, featured first.
pub fn catalog(show_more: bool) -> impl Iterator<Item = &'static Template> {
    let more: &'static [Template] = if show_more { &MORE } else { &[] };
    FEATURED.iter().chain(more)
}

/// Look up a template by id across the whole catalog.
#[must_use]
pub fn find(id: u32) -> Option<&'static Template> {
    catalog(true).find(|t| t.id == id)
}
