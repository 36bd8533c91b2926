// ============================================================
// Infrastructure Layer
// ============================================================
// Cross-cutting persistence concerns:
//
//   config_store.rs — Saves and loads the architecture config
//                     as JSON so an external harness can
//                     rebuild the exact same model. Weight
//                     persistence belongs to that harness, not
//                     to this crate.
//
// Reference: Rust Book §9 (Error Handling with anyhow)

/// Architecture-config saving and loading
pub mod config_store;
