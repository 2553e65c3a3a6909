//! Containers backing task and category storage.

mod ordered_log;
mod sorted_list;

pub use ordered_log::OrderedLog;
pub use sorted_list::{Iter, SortedList};
