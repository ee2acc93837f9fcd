//! The edit lifecycle machine, its pure core, and its asynchronous driver.
//! 编辑生命周期状态机、其纯核心及其异步驱动。
mod actor;
pub mod context;
pub mod event;
pub mod handle;
pub mod lifecycle;
pub mod state;
pub mod validation;

pub use context::EditContext;
pub use event::{EditEvent, TimeoutEvent};
pub use handle::InlineEdit;
pub use lifecycle::{Effect, LifecycleMachine, Snapshot};
pub use state::EditState;
pub use validation::StateValidator;
