/* src/cli/core/src/config/tests/mod.rs */

use super::loader::{find_seam_config, load_seam_config};
use super::*;
