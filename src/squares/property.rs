//! Ownable property squares.

use serde::{Deserialize, Serialize};

use super::context::TurnContext;
use super::square::SquareEffect;
use crate::core::PlayerId;
use crate::decisions::Decision;
use crate::events::GameEvent;

/// A property that can be bought and charges rent.
///
/// The owner is a seat id, never a reference: clearing it has no effect on
/// the player.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySquare {
    position: u8,
    name: String,
    price: i64,
    rent: i64,
    owner: Option<PlayerId>,
}

impl PropertySquare {
    pub fn new(position: u8, name: impl Into<String>, price: i64, rent: i64) -> Self {
        Self {
            position,
            name: name.into(),
            price,
            rent,
            owner: None,
        }
    }

    #[must_use]
    pub fn price(&self) -> i64 {
        self.price
    }

    #[must_use]
    pub fn rent(&self) -> i64 {
        self.rent
    }

    #[must_use]
    pub fn owner(&self) -> Option<PlayerId> {
        self.owner
    }

    pub fn set_owner(&mut self, owner: Option<PlayerId>) {
        self.owner = owner;
    }

    fn offer(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        let name = ctx.name_of(player);

        if ctx.player(player).money() < self.price {
            ctx.narrate(GameEvent::CannotAfford {
                player: name,
                property: self.name.clone(),
                price: self.price,
            });
            return;
        }

        let accepted = ctx.decisions.ask_yes_no(&Decision::BuyProperty {
            player: &name,
            property: &self.name,
            price: self.price,
        });

        if accepted {
            ctx.debit(player, self.price);
            self.owner = Some(player);
            ctx.narrate(GameEvent::Bought {
                player: name,
                property: self.name.clone(),
                price: self.price,
            });
        } else {
            ctx.narrate(GameEvent::DeclinedPurchase {
                player: name,
                property: self.name.clone(),
            });
        }
    }
}

impl SquareEffect for PropertySquare {
    fn position(&self) -> u8 {
        self.position
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn land_on(&mut self, player: PlayerId, ctx: &mut TurnContext<'_>) {
        match self.owner {
            None => self.offer(player, ctx),
            Some(owner) if owner != player => {
                // Rent is owed in full even if it bankrupts the payer.
                ctx.debit(player, self.rent);
                ctx.credit(owner, self.rent);
                let payer = ctx.name_of(player);
                let owner = ctx.name_of(owner);
                ctx.narrate(GameEvent::RentPaid {
                    payer,
                    owner,
                    property: self.name.clone(),
                    rent: self.rent,
                });
            }
            Some(_) => {
                let name = ctx.name_of(player);
                ctx.narrate(GameEvent::OwnProperty {
                    player: name,
                    property: self.name.clone(),
                });
            }
        }
    }

    fn release_ownership(&mut self) {
        self.owner = None;
    }
}

#[cfg(test)]
mod tests {
    use super::super::context::fixture::Table;
    use super::*;

    fn central() -> PropertySquare {
        PropertySquare::new(2, "Central", 800, 90)
    }

    #[test]
    fn test_buy_when_accepted() {
        let mut table = Table::new(2).answering([true]);
        let p0 = PlayerId::new(0);
        let mut square = central();

        square.land_on(p0, &mut table.ctx());

        assert_eq!(square.owner(), Some(p0));
        assert_eq!(table.money(p0), 700);
        assert_eq!(table.decisions.asked(), 1);
        assert_eq!(table.log.lines(), vec!["P0 bought Central for $800"]);
    }

    #[test]
    fn test_decline_leaves_unowned() {
        let mut table = Table::new(2).answering([false]);
        let p0 = PlayerId::new(0);
        let mut square = central();

        square.land_on(p0, &mut table.ctx());

        assert_eq!(square.owner(), None);
        assert_eq!(table.money(p0), 1500);
        assert_eq!(table.log.lines(), vec!["P0 chose not to buy Central"]);
    }

    #[test]
    fn test_cannot_afford_skips_decision() {
        let mut table = Table::new(2).answering([true]);
        let p0 = PlayerId::new(0);
        table.players[p0].reduce_money(800);
        let mut square = central();

        square.land_on(p0, &mut table.ctx());

        assert_eq!(square.owner(), None);
        assert_eq!(table.money(p0), 700);
        assert_eq!(table.decisions.asked(), 0);
    }

    #[test]
    fn test_exact_price_is_affordable() {
        let mut table = Table::new(2).answering([true]);
        let p0 = PlayerId::new(0);
        table.players[p0].reduce_money(700);
        let mut square = central();

        square.land_on(p0, &mut table.ctx());

        assert_eq!(square.owner(), Some(p0));
        assert_eq!(table.money(p0), 0);
    }

    #[test]
    fn test_rent_moves_from_visitor_to_owner() {
        let mut table = Table::new(2);
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        let mut square = central();
        square.set_owner(Some(p0));

        square.land_on(p1, &mut table.ctx());

        assert_eq!(table.money(p1), 1410);
        assert_eq!(table.money(p0), 1590);
        assert_eq!(table.log.lines(), vec!["P1 pays $90 rent to P0"]);
    }

    #[test]
    fn test_rent_can_bankrupt() {
        let mut table = Table::new(2);
        let (p0, p1) = (PlayerId::new(0), PlayerId::new(1));
        table.players[p1].reduce_money(1450);
        let mut square = central();
        square.set_owner(Some(p0));

        square.land_on(p1, &mut table.ctx());

        assert_eq!(table.money(p1), -40);
        assert_eq!(table.money(p0), 1590);
        assert!(table
            .log
            .events()
            .contains(&GameEvent::WentBankrupt { player: "P1".into() }));
    }

    #[test]
    fn test_owner_pays_nothing() {
        let mut table = Table::new(2).answering([true, true]);
        let p0 = PlayerId::new(0);
        let mut square = central();

        square.land_on(p0, &mut table.ctx());
        let after_purchase = table.money(p0);
        square.land_on(p0, &mut table.ctx());

        assert_eq!(table.money(p0), after_purchase);
        assert_eq!(table.decisions.asked(), 1);
    }

    #[test]
    fn test_release_ownership() {
        let mut square = central();
        square.set_owner(Some(PlayerId::new(1)));
        square.release_ownership();
        assert_eq!(square.owner(), None);
    }
}
