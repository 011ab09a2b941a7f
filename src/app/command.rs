#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    FetchUsers,
}
