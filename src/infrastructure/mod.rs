pub mod iex_adapter;
