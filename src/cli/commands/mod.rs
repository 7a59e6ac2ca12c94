pub mod add;
pub mod clone;
pub mod config;
pub mod db;
pub mod del;
pub mod init;
pub mod list;
pub mod log;
pub mod summary;
pub mod tags;

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::ui::messages::warning;

/// Write an audit row; a failure here never fails the command itself.
pub(crate) fn audit(pool: &DbPool, operation: &str, target: &str, message: &str) {
    if let Err(e) = ttlog(&pool.conn, operation, target, message) {
        warning(format!("Failed to write internal log: {}", e));
    }
}
