pub mod assemble;
pub mod clusterer;
pub mod cost;
pub mod frontends;
pub mod mode;
pub mod reference;
pub mod sorted;
pub mod test_helpers;

// Internal building blocks
mod backtrack;
mod smawk;
mod table;

// Public surface
pub use assemble::Clustering;
pub use backtrack::backtrack;
pub use clusterer::{cluster, cluster_with, ClusterOptions, Kmeans1d, Kmeans1dBuilder};
pub use cost::{CostModel, PrefixAggregates};
pub use mode::Mode;
pub use smawk::row_minima;
pub use sorted::SortedSample;
pub use table::DpTables;

// Opt-in tracing (cheap unless env var set)
#[macro_export]
macro_rules! kmtrace {
    ($($arg:tt)*) => {
        if std::env::var_os("KMEANS1D_TRACE").is_some() {
            eprintln!($($arg)*);
        }
    }
}
