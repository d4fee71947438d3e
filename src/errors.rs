use thiserror::Error;

#[derive(Error, Debug)]
pub enum DumpError {
    #[error("line {line}: token '{token}' is not a two-digit hex value")]
    BadToken { line: usize, token: String },
}
