#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    pub event: Option<String>,
    pub data: Option<String>,
}
