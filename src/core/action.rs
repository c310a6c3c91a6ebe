//! Side-effect actions attached to states and transitions.
//!
//! An action performs one side effect and returns a human-readable
//! description of what it did. The engine never inspects the description;
//! it only collects them in order so the driver can render them.

/// A side-effecting operation attached to a state hook or a transition.
///
/// Actions take no arguments and have no failure channel: a definition that
/// wants recoverable failure encodes it in the returned description. State
/// shared across several actions is passed in via explicit shared-by-reference
/// captures (`Arc`, atomics, `Mutex`), never ambient globals.
///
/// Each action is owned by exactly one hook list or one transition.
///
/// # Example
///
/// ```rust
/// use machina::core::Action;
///
/// let warm_up: Action = Box::new(|| "Warming up hardware...".to_string());
/// assert_eq!(warm_up(), "Warming up hardware...");
/// ```
pub type Action = Box<dyn Fn() -> String + Send + Sync>;

/// Run a hook list in declaration order, labeling each description with the
/// phase it ran in. The label column is fixed-width so rendered effect lists
/// line up.
pub(crate) fn run_labeled(actions: &[Action], label: &str) -> Vec<String> {
    actions
        .iter()
        .map(|action| format!("{label:<15}> {}", action()))
        .collect()
}
