//! Classification Services

mod classifier_chain;
mod rules;

pub use classifier_chain::{Classification, ClassifierChain, ClassifierRule};
