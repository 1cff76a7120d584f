//! Regime classifiers and the decision fusion engine.

pub mod decision;
pub mod flow;
pub mod funding;
pub mod macro_cycle;
pub mod structure;

pub use decision::{decide_action, DecisionInput, ScoreWeights};
pub use flow::FlowClassifier;
pub use funding::FundingClassifier;
pub use macro_cycle::{MacroClassifier, MacroSnapshot};
pub use structure::{StructureClassifier, StructureSnapshot};
