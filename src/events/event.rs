//! Narration events.
//!
//! Every state change a turn makes is described by a `GameEvent`. Events
//! carry player and square names so they can be rendered without access to
//! the game.

use serde::{Deserialize, Serialize};

use crate::game::GameResult;

/// Something that happened during play.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    RoundStarted { round: u32 },
    Rolled { player: String, die1: u8, die2: u8 },
    Moved { player: String, from: u8, to: u8, square: String },

    /// Salary for landing on (`passed == false`) or passing Go.
    Salary { player: String, amount: i64, passed: bool },

    Bought { player: String, property: String, price: i64 },
    DeclinedPurchase { player: String, property: String },
    CannotAfford { player: String, property: String, price: i64 },
    RentPaid { payer: String, owner: String, property: String, rent: i64 },
    OwnProperty { player: String, property: String },

    ChanceGain { player: String, amount: i64 },
    ChanceLoss { player: String, amount: i64 },
    TaxPaid { player: String, amount: i64 },
    JustVisiting { player: String },
    SentToJail { player: String },
    FreeParking { player: String },

    InJail { player: String },
    JailFinePaid { player: String, fine: i64 },
    ReleasedOnDoubles { player: String },
    ReleasedAfterFine { player: String, fine: i64 },
    StayedInJail { player: String },

    WentBankrupt { player: String },
    Retired { player: String },
    GameOver { result: GameResult },
}

impl std::fmt::Display for GameEvent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use GameEvent::*;

        match self {
            RoundStarted { round } => write!(f, "Round {round}"),
            Rolled { player, die1, die2 } => {
                write!(f, "{player} rolled {die1} + {die2} = {}", die1 + die2)
            }
            Moved { player, from, to, square } => {
                write!(f, "{player} moves from {from} to {to} ({square})")
            }
            Salary { player, amount, passed: false } => {
                write!(f, "{player} receives ${amount} salary for landing on GO")
            }
            Salary { player, amount, passed: true } => {
                write!(f, "{player} receives ${amount} salary for passing GO")
            }
            Bought { player, property, price } => {
                write!(f, "{player} bought {property} for ${price}")
            }
            DeclinedPurchase { player, property } => {
                write!(f, "{player} chose not to buy {property}")
            }
            CannotAfford { player, property, .. } => {
                write!(f, "{player} cannot afford to buy {property}")
            }
            RentPaid { payer, owner, rent, .. } => {
                write!(f, "{payer} pays ${rent} rent to {owner}")
            }
            OwnProperty { player, property } => {
                write!(f, "{player} owns {property} - no rent to pay")
            }
            ChanceGain { player, amount } => write!(f, "{player} gains ${amount} from Chance"),
            ChanceLoss { player, amount } => write!(f, "{player} loses ${amount} from Chance"),
            TaxPaid { player, amount } => write!(f, "{player} pays ${amount} in tax"),
            JustVisiting { player } => write!(f, "{player} is just visiting jail"),
            SentToJail { player } => write!(f, "{player} goes to jail"),
            FreeParking { player } => {
                write!(f, "{player} lands on Free Parking. Nothing happens.")
            }
            InJail { player } => write!(f, "{player} is in jail."),
            JailFinePaid { player, fine } => {
                write!(f, "{player} pays ${fine} to get out of jail")
            }
            ReleasedOnDoubles { player } => {
                write!(f, "{player} got out of jail with doubles!")
            }
            ReleasedAfterFine { player, fine } => {
                write!(f, "{player} got out of jail after three turns and paid ${fine}")
            }
            StayedInJail { player } => write!(f, "{player} stays in jail"),
            WentBankrupt { player } => write!(f, "{player} has gone bankrupt!"),
            Retired { player } => write!(f, "{player} retires from the game"),
            GameOver { result } => write!(f, "{result}"),
        }
    }
}
