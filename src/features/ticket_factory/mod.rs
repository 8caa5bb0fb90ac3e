use crate::error::{LottoError, LottoResult};
use crate::features::number_set::RandomDraw;
use crate::types::{NumberSet, PurchaseBatch, Ticket};

pub struct TicketFactory;

impl TicketFactory {
    /// Turns a purchase amount into one random ticket per `unit_price`.
    ///
    /// The amount must buy at least one ticket and leave no change.
    pub fn build_batch<D: RandomDraw + ?Sized>(
        purchase_amount: u64,
        unit_price: u64,
        source: &mut D,
    ) -> LottoResult<PurchaseBatch> {
        let ticket_count = ticket_count(purchase_amount, unit_price)?;
        let len = usize::try_from(ticket_count).map_err(|_| LottoError::MathOverflow)?;

        let tickets: Vec<Ticket> = (0..len)
            .map(|_| Ticket::new(NumberSet::random(&mut *source)))
            .collect();

        log::debug!(
            "ticket_factory.build_batch: amount={purchase_amount} unit_price={unit_price} tickets={len}"
        );

        Ok(PurchaseBatch {
            tickets,
            unit_price,
        })
    }

    /// Wraps tickets chosen elsewhere, e.g. manual picks or fixtures.
    pub fn from_tickets(tickets: Vec<Ticket>, unit_price: u64) -> LottoResult<PurchaseBatch> {
        if unit_price == 0 {
            return Err(LottoError::InvalidUnitPrice);
        }
        let len = u64::try_from(tickets.len()).map_err(|_| LottoError::MathOverflow)?;
        len.checked_mul(unit_price).ok_or(LottoError::MathOverflow)?;
        Ok(PurchaseBatch {
            tickets,
            unit_price,
        })
    }
}

pub fn ticket_count(purchase_amount: u64, unit_price: u64) -> LottoResult<u64> {
    if unit_price == 0 {
        return Err(LottoError::InvalidUnitPrice);
    }
    if purchase_amount < unit_price {
        return Err(LottoError::BelowMinimumPurchase {
            amount: purchase_amount,
            unit_price,
        });
    }
    if purchase_amount % unit_price != 0 {
        return Err(LottoError::NotAMultipleOfUnitPrice {
            amount: purchase_amount,
            unit_price,
        });
    }
    Ok(purchase_amount / unit_price)
}
