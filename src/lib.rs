mod error;
mod parser;
mod reader;
mod record;

pub use error::ReaderError;
pub use parser::StreamEventParser;
pub use reader::RecordReader;
pub use record::Record;
