//! Content-line model shared by the vCard and iCalendar pipelines.
//!
//! Both grammars use the same `NAME;PARAM=value:VALUE` line shape, the same
//! TEXT escaping and the same CRLF terminator, so documents in either format
//! are assembled with one [`DocumentBuilder`].
//!
//! Lines are not folded at 75 octets.

mod document;
mod escape;
mod line;

pub use document::{CRLF, DocumentBuilder, SerializedDocument};
pub use escape::{escape_param_value, escape_text};
pub use line::{ContentLine, Parameter, Value};
