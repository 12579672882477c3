use std::future::Future;
use std::pin::Pin;

use sea_orm::{DatabaseTransaction, TransactionError, TransactionTrait};
use tracing::debug;

use crate::error::AppError;

/// Boxed future handed back by a `with_txn` closure.
pub type TxnFuture<'c, T> = Pin<Box<dyn Future<Output = Result<T, AppError>> + Send + 'c>>;

/// Execute a closure within a database transaction.
///
/// Commits when the closure returns `Ok`, rolls back on `Err`. The closure's
/// own error is returned unchanged; failures to begin or commit are mapped
/// through the DB error translation.
pub async fn with_txn<C, T, F>(conn: &C, f: F) -> Result<T, AppError>
where
    C: TransactionTrait,
    F: for<'c> FnOnce(&'c DatabaseTransaction) -> TxnFuture<'c, T> + Send,
    T: Send,
{
    conn.transaction::<F, T, AppError>(f)
        .await
        .map_err(|e| match e {
            TransactionError::Connection(db_err) => {
                debug!(error = %db_err, "transaction begin/commit failed");
                AppError::from(db_err)
            }
            TransactionError::Transaction(app_err) => app_err,
        })
}
