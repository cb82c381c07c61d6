//! Dashboard view state: the token reveal toggle and the static card list.

pub mod view;
