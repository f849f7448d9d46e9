//! Natural-order string comparison, the sort built on it, and assorted
//! string helpers (case reshaping, quoting, table rendering, random name
//! generation).

pub mod case;
pub mod names;
pub mod natural;
pub mod quote;
pub mod sort;
pub mod table;

pub use natural::{natural_cmp, natural_cmp_opt, NaturalOrder};
pub use sort::{natural_sort, natural_sort_opt};
