mod error;
pub mod template;
mod value;

pub use error::Error;
pub use template::{
    BlankPage, Position, Props, Region, RegionKind, Symbology, Template, is_template_content,
};
pub use value::{Value, format_number};
