use crate::domain::models::Symbol;

#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Fetch quote and logo for `symbol` concurrently.
    FetchSymbol { generation: u64, symbol: Symbol },
}
