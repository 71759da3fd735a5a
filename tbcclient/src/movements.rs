//! Complete account statement over a period, page by page

use crate::caller::TbcSoapCaller;
use crate::error::{Result, TbcError};
use crate::operations::{AccountMovement, GetAccountMovementsRequestIo, DEFAULT_PAGE_SIZE};
use crate::transport::SoapTransport;
use tbctypes::Period;
use tracing::info;

/// Fetches every movement of `period`
///
/// Page 0 declares the total count and the page size; the remaining pages are
/// then requested one after another. Records are returned in the order the
/// pages arrived.
///
/// # Errors
///
/// The first failing page aborts the whole retrieval with its error.
/// [`TbcError::Integrity`] when the number of received records differs from
/// the declared total.
pub async fn get_account_movements<T: SoapTransport>(
    caller: &TbcSoapCaller<T>,
    period: Period,
) -> Result<Vec<AccountMovement>> {
    get_account_movements_with_page_size(caller, period, DEFAULT_PAGE_SIZE).await
}

/// Same as [`get_account_movements`] with an explicit requested page size
pub async fn get_account_movements_with_page_size<T: SoapTransport>(
    caller: &TbcSoapCaller<T>,
    period: Period,
    page_size: u32,
) -> Result<Vec<AccountMovement>> {
    info!("TBC - getting account movements for {}", period);

    let request = GetAccountMovementsRequestIo::new(period, 0).with_page_size(page_size);
    let first = caller.call(&request).await?;

    let result = first.result.ok_or_else(|| {
        TbcError::Deserialization("GetAccountMovementsResponseIo has no result".into())
    })?;
    let total = result.total_count;
    let mut movements = first.account_movement;

    info!("TBC - {} records are being received", total);

    let declared_page_size = u64::from(result.pager.page_size);
    if declared_page_size == 0 && total > 0 {
        return Err(TbcError::Integrity {
            expected: total,
            received: movements.len() as u64,
        });
    }

    let pages = if declared_page_size == 0 {
        0
    } else {
        total.div_ceil(declared_page_size)
    };

    for index in 1..pages {
        let page_index = u32::try_from(index).map_err(|_| TbcError::Integrity {
            expected: total,
            received: movements.len() as u64,
        })?;
        let request = GetAccountMovementsRequestIo::new(period, page_index)
            .with_page_size(result.pager.page_size);

        let page = caller.call(&request).await?;
        info!(
            "TBC - page {}/{}: {} records",
            index + 1,
            pages,
            page.account_movement.len()
        );
        movements.extend(page.account_movement);
    }

    let received = movements.len() as u64;
    if received != total {
        return Err(TbcError::Integrity {
            expected: total,
            received,
        });
    }

    info!("TBC - {} records have been received", received);
    Ok(movements)
}
