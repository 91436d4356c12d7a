//! File formats around [grid_planning]: CSV maps in, JSON results out, the batch comparison over
//! a directory of maps, and the heap sampler the command line measures memory with.

pub mod alloc;
pub mod compare;
pub mod reader;
pub mod writer;

pub use alloc::{allocated_bytes, TrackingAllocator};
pub use compare::{collect_maps, run_comparison, CompareError, MapSource, RunSummary};
pub use reader::{load_grid, read_grid, LoadError};
pub use writer::{save_result, write_result, ResultRecord, WriteError};
