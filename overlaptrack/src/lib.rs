//! Overlap-based object tracking between consecutive label maps
//!
//! This crate matches the labeled regions of a segmentation frame at time t to
//! the regions of the frame at time t+1 by the number of pixels they share.
//! Matching runs in three phases: label enumeration, overlap histogram
//! construction and global assignment (greedy by default).
//!
//! ```rust
//! use ndarray::array;
//! use overlaptrack::single_timestep_overlap_tracking;
//!
//! let first = array![[0, 1, 1], [0, 2, 2]];
//! let second = array![[0, 7, 7], [0, 7, 9]];
//!
//! let map = single_timestep_overlap_tracking(first.view(), second.view(), [0]).unwrap();
//! assert_eq!(map.get(1), Some(7));
//! assert_eq!(map.get(2), Some(9));
//! ```

pub mod assignment;
pub mod config;
pub mod error;
pub mod histogram;
pub mod labels;
pub mod matcher;

pub use assignment::{assign_greedy, assign_optimal, AssignmentResult, CorrespondenceMap};
pub use config::{AssignmentStrategy, MatcherConfig};
pub use error::{Result, TrackingError};
pub use histogram::{overlap_records, OverlapHistogram, OverlapRecord};
pub use labels::{enumerate_labels, IgnoreSet, Label};
pub use matcher::{single_timestep_overlap_tracking, OverlapMatcher};
