//! The raster-surface drawing contract.
//!
//! [`Surface`] is the subset of the Canvas 2D API the renderer needs. The
//! browser implementation is a thin pass-through over
//! [`web_sys::CanvasRenderingContext2d`]; tests supply a recording surface.
//! Method names follow Canvas 2D so the mapping stays obvious.

use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlImageElement};

use crate::background::FitRect;

/// A 2D drawing surface with a current transform and save/restore stack.
pub trait Surface {
    /// Image handle the surface can draw.
    type Image;
    /// Error returned by fallible drawing calls.
    type Error;

    /// Reset the transform and clear the whole surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the transform cannot be reset.
    fn clear(&mut self, width: f64, height: f64) -> Result<(), Self::Error>;

    /// Draw `image` scaled into `dest`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the image cannot be drawn (e.g. it is broken).
    fn draw_image(&mut self, image: &Self::Image, dest: FitRect) -> Result<(), Self::Error>;

    fn save(&mut self);
    fn restore(&mut self);

    /// # Errors
    ///
    /// Returns `Err` if the transform cannot be applied.
    fn translate(&mut self, x: f64, y: f64) -> Result<(), Self::Error>;

    /// Rotate the current transform clockwise by `radians`.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the transform cannot be applied.
    fn rotate(&mut self, radians: f64) -> Result<(), Self::Error>;

    fn set_stroke_style(&mut self, color: &str);
    fn set_fill_style(&mut self, color: &str);
    fn set_line_width(&mut self, width: f64);

    /// Set the dash pattern; an empty slice draws solid lines.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the pattern is rejected.
    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), Self::Error>;

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);

    /// Add a full circle to the current path.
    ///
    /// # Errors
    ///
    /// Returns `Err` for a negative radius.
    fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), Self::Error>;

    fn stroke(&mut self);
    fn fill(&mut self);

    /// Set a CSS font and center text on the anchor point both ways.
    fn set_centered_font(&mut self, font: &str);

    /// # Errors
    ///
    /// Returns `Err` if the text cannot be drawn.
    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;

    /// # Errors
    ///
    /// Returns `Err` if the text cannot be drawn.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), Self::Error>;
}

impl Surface for CanvasRenderingContext2d {
    type Image = HtmlImageElement;
    type Error = JsValue;

    fn clear(&mut self, width: f64, height: f64) -> Result<(), JsValue> {
        self.set_transform(1.0, 0.0, 0.0, 1.0, 0.0, 0.0)?;
        self.clear_rect(0.0, 0.0, width, height);
        Ok(())
    }

    fn draw_image(&mut self, image: &HtmlImageElement, dest: FitRect) -> Result<(), JsValue> {
        self.draw_image_with_html_image_element_and_dw_and_dh(image, dest.x, dest.y, dest.width, dest.height)
    }

    fn save(&mut self) {
        CanvasRenderingContext2d::save(self);
    }

    fn restore(&mut self) {
        CanvasRenderingContext2d::restore(self);
    }

    fn translate(&mut self, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::translate(self, x, y)
    }

    fn rotate(&mut self, radians: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::rotate(self, radians)
    }

    fn set_stroke_style(&mut self, color: &str) {
        self.set_stroke_style_str(color);
    }

    fn set_fill_style(&mut self, color: &str) {
        self.set_fill_style_str(color);
    }

    fn set_line_width(&mut self, width: f64) {
        CanvasRenderingContext2d::set_line_width(self, width);
    }

    fn set_line_dash(&mut self, segments: &[f64]) -> Result<(), JsValue> {
        let dash_array = js_sys::Array::new();
        for segment in segments {
            dash_array.push(&(*segment).into());
        }
        CanvasRenderingContext2d::set_line_dash(self, &dash_array)
    }

    fn stroke_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::stroke_rect(self, x, y, width, height);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        CanvasRenderingContext2d::fill_rect(self, x, y, width, height);
    }

    fn begin_path(&mut self) {
        CanvasRenderingContext2d::begin_path(self);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::move_to(self, x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        CanvasRenderingContext2d::line_to(self, x, y);
    }

    fn circle(&mut self, x: f64, y: f64, radius: f64) -> Result<(), JsValue> {
        self.arc(x, y, radius, 0.0, std::f64::consts::TAU)
    }

    fn stroke(&mut self) {
        CanvasRenderingContext2d::stroke(self);
    }

    fn fill(&mut self) {
        CanvasRenderingContext2d::fill(self);
    }

    fn set_centered_font(&mut self, font: &str) {
        self.set_font(font);
        self.set_text_align("center");
        self.set_text_baseline("middle");
    }

    fn stroke_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::stroke_text(self, text, x, y)
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), JsValue> {
        CanvasRenderingContext2d::fill_text(self, text, x, y)
    }
}
