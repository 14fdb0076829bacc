pub use anyhow::{bail, Context, Result};
pub use tracing::{debug, error, info, warn};
