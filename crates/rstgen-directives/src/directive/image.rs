//! Images and figures.

use super::{FromFields, Render, trim_blank_lines};
use crate::{DirectiveKind, DirectiveWriter, FieldReader, FormatError};

/// Display options shared by `image` and `figure`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageOptions {
    pub align: Option<String>,
    pub alt: Option<String>,
    pub height: Option<String>,
    pub width: Option<String>,
    pub loading: Option<String>,
    pub scale: Option<String>,
    pub target: Option<String>,
}

impl ImageOptions {
    fn read(fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            align: fields.opt_text("align")?,
            alt: fields.opt_text("alt")?,
            height: fields.opt_text("height")?,
            width: fields.opt_text("width")?,
            loading: fields.opt_text("loading")?,
            scale: fields.opt_text("scale")?,
            target: fields.opt_text("target")?,
        })
    }

    fn write(&self, writer: DirectiveWriter) -> DirectiveWriter {
        writer
            .option("align", self.align.as_ref())
            .option("alt", self.alt.as_ref())
            .option("height", self.height.as_ref())
            .option("width", self.width.as_ref())
            .option("loading", self.loading.as_ref())
            .option("scale", self.scale.as_ref())
            .option("target", self.target.as_ref())
    }
}

/// `.. image:: path` with display options.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    path: String,
    options: ImageOptions,
}

impl Image {
    #[must_use]
    pub fn new(path: impl Into<String>, options: ImageOptions) -> Self {
        Self {
            path: path.into(),
            options,
        }
    }
}

impl FromFields for Image {
    fn from_fields(_kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self::new(fields.text("path")?, ImageOptions::read(fields)?))
    }
}

impl Render for Image {
    fn render(&self) -> String {
        self.options
            .write(DirectiveWriter::new("image", Some(&self.path)))
            .finish()
    }
}

/// `.. figure:: path` with display options and an optional caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Figure {
    image: Image,
    caption: Vec<String>,
}

impl FromFields for Figure {
    fn from_fields(kind: DirectiveKind, fields: &FieldReader<'_>) -> Result<Self, FormatError> {
        Ok(Self {
            image: Image::from_fields(kind, fields)?,
            caption: trim_blank_lines(fields.opt_lines("caption")?),
        })
    }
}

impl Render for Figure {
    fn render(&self) -> String {
        self.image
            .options
            .write(DirectiveWriter::new("figure", Some(&self.image.path)))
            .body(&self.caption)
            .finish()
    }
}
