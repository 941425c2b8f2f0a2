//! Shared UI components for the Dioxus fullstack web UI.

pub mod cards;
pub mod create_modal;
pub mod empty_state;
pub mod layout;
pub mod nav;
pub mod skeleton;
pub mod status_badge;

pub use cards::{InstanceCard, WorkspaceCard};
pub use create_modal::CreateModal;
pub use empty_state::EmptyState;
pub use layout::Layout;
pub use nav::Nav;
pub use skeleton::{DetailSkeleton, SkeletonGrid, SkeletonKind};
pub use status_badge::StatusBadge;
