pub mod random_multiset;

pub use random_multiset::RandomMultiset;
