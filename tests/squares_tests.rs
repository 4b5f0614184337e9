//! Square effects exercised through the public `TurnContext`.

use rust_monopoly::core::config::JAIL_POSITION;
use rust_monopoly::{
    ChanceSquare, EventLog, FreeParkingSquare, GameEvent, GameRng, GoSquare, GoToJailSquare,
    IncomeTaxSquare, JailSquare, Player, PlayerId, PlayerMap, PropertySquare, RulesConfig, Scripted,
    Square, SquareEffect, TurnContext,
};

const ALICE: PlayerId = PlayerId::new(0);
const BOB: PlayerId = PlayerId::new(1);

/// Backing storage for a turn context.
struct Table {
    players: PlayerMap<Player>,
    rules: RulesConfig,
    rng: GameRng,
    decisions: Scripted,
    log: EventLog,
}

impl Table {
    fn new(seed: u64) -> Self {
        let names = ["Alice", "Bob"];
        Self {
            players: PlayerMap::new(2, |id| Player::new(names[id.index()], 1500)),
            rules: RulesConfig::default(),
            rng: GameRng::new(seed),
            decisions: Scripted::new([]),
            log: EventLog::new(),
        }
    }

    fn answering(mut self, answers: impl IntoIterator<Item = bool>) -> Self {
        self.decisions = Scripted::new(answers);
        self
    }

    fn land(&mut self, square: &mut Square, player: PlayerId) {
        let mut ctx = TurnContext {
            players: &mut self.players,
            rules: &self.rules,
            rng: &mut self.rng,
            decisions: &mut self.decisions,
            narrator: &mut self.log,
            jail_position: JAIL_POSITION,
        };
        square.land_on(player, &mut ctx);
    }

    fn pass(&mut self, square: &mut Square, player: PlayerId) {
        let mut ctx = TurnContext {
            players: &mut self.players,
            rules: &self.rules,
            rng: &mut self.rng,
            decisions: &mut self.decisions,
            narrator: &mut self.log,
            jail_position: JAIL_POSITION,
        };
        square.pass_by(player, &mut ctx);
    }

    fn money(&self, player: PlayerId) -> i64 {
        self.players[player].money()
    }
}

#[test]
fn test_go_landing_and_passing() {
    let mut table = Table::new(1);
    let mut go: Square = GoSquare::new(1).into();

    table.land(&mut go, ALICE);
    assert_eq!(table.money(ALICE), 3000);

    table.players[ALICE].set_position(18);
    table.pass(&mut go, ALICE);
    assert_eq!(table.money(ALICE), 4500);

    // Already standing on Go: no pass salary
    table.players[ALICE].set_position(1);
    table.pass(&mut go, ALICE);
    assert_eq!(table.money(ALICE), 4500);
}

#[test]
fn test_buying_an_unowned_property() {
    let mut table = Table::new(1).answering([true]);
    let mut central: Square = PropertySquare::new(2, "Central", 800, 90).into();

    table.land(&mut central, ALICE);

    assert_eq!(table.money(ALICE), 700);
    assert_eq!(central.owner(), Some(ALICE));
    assert_eq!(
        table.log.lines(),
        vec!["Alice bought Central for $800".to_string()]
    );
}

#[test]
fn test_declining_a_purchase_changes_nothing() {
    let mut table = Table::new(1).answering([false]);
    let mut central: Square = PropertySquare::new(2, "Central", 800, 90).into();

    table.land(&mut central, ALICE);

    assert_eq!(table.money(ALICE), 1500);
    assert_eq!(central.owner(), None);
}

#[test]
fn test_unaffordable_property_is_not_offered() {
    let mut table = Table::new(1).answering([true]);
    table.players[ALICE].reduce_money(800);
    let mut central: Square = PropertySquare::new(2, "Central", 800, 90).into();

    table.land(&mut central, ALICE);

    assert_eq!(table.decisions.asked(), 0);
    assert_eq!(table.money(ALICE), 700);
    assert_eq!(central.owner(), None);
}

#[test]
fn test_exact_price_is_affordable() {
    let mut table = Table::new(1).answering([true]);
    table.players[ALICE].reduce_money(700);
    let mut central: Square = PropertySquare::new(2, "Central", 800, 90).into();

    table.land(&mut central, ALICE);

    assert_eq!(table.money(ALICE), 0);
    assert_eq!(central.owner(), Some(ALICE));
}

#[test]
fn test_rent_moves_between_players() {
    let mut table = Table::new(1);
    let mut peak = PropertySquare::new(20, "Peak", 850, 100);
    peak.set_owner(Some(BOB));
    let mut peak: Square = peak.into();

    table.land(&mut peak, ALICE);

    assert_eq!(table.money(ALICE), 1400);
    assert_eq!(table.money(BOB), 1600);
    assert_eq!(table.decisions.asked(), 0);
}

#[test]
fn test_rent_can_bankrupt() {
    let mut table = Table::new(1);
    table.players[ALICE].reduce_money(1450);
    let mut peak = PropertySquare::new(20, "Peak", 850, 100);
    peak.set_owner(Some(BOB));
    let mut peak: Square = peak.into();

    table.land(&mut peak, ALICE);

    assert_eq!(table.money(ALICE), -50);
    assert!(table.players[ALICE].is_bankrupt());
    assert!(table.log.events().contains(&GameEvent::WentBankrupt {
        player: "Alice".into()
    }));
}

#[test]
fn test_own_property_is_free() {
    let mut table = Table::new(1);
    let mut peak = PropertySquare::new(20, "Peak", 850, 100);
    peak.set_owner(Some(ALICE));
    let mut peak: Square = peak.into();

    table.land(&mut peak, ALICE);

    assert_eq!(table.money(ALICE), 1500);
}

#[test]
fn test_income_tax() {
    let mut table = Table::new(1);
    let mut tax: Square = IncomeTaxSquare::new(4).into();

    table.land(&mut tax, ALICE);
    assert_eq!(table.money(ALICE), 1350);

    // 1350 -> 130
    table.land(&mut tax, ALICE);
    assert_eq!(table.money(ALICE), 1220);
}

#[test]
fn test_income_tax_on_debt_is_a_refund() {
    let mut table = Table::new(1);
    table.players[ALICE].reduce_money(1750);
    let mut tax: Square = IncomeTaxSquare::new(4).into();

    table.land(&mut tax, ALICE);

    // -250 / 100 * 10 = -20
    assert_eq!(table.money(ALICE), -230);
}

#[test]
fn test_chance_amounts_are_in_range() {
    let mut gains = 0;
    let mut losses = 0;
    for seed in 0..200 {
        let mut table = Table::new(seed);
        let mut chance: Square = ChanceSquare::new(9).into();

        table.land(&mut chance, ALICE);

        let delta = table.money(ALICE) - 1500;
        assert_eq!(delta % 10, 0);
        assert!(delta != 0);
        if delta > 0 {
            assert!(delta <= 200);
            gains += 1;
        } else {
            assert!(delta >= -300);
            losses += 1;
        }
    }
    assert!(gains > 0 && losses > 0);
}

#[test]
fn test_go_to_jail_and_visiting() {
    let mut table = Table::new(1);
    let mut go_to_jail: Square = GoToJailSquare::new(16).into();
    let mut jail: Square = JailSquare::new(6).into();

    table.land(&mut jail, BOB);
    assert_eq!(
        table.log.events(),
        &[GameEvent::JustVisiting {
            player: "Bob".into()
        }]
    );

    table.players[ALICE].set_position(16);
    table.land(&mut go_to_jail, ALICE);
    assert!(table.players[ALICE].is_in_jail());
    assert_eq!(table.players[ALICE].position(), JAIL_POSITION);
    assert_eq!(table.players[ALICE].turns_in_jail(), 0);
    assert_eq!(table.money(ALICE), 1500);
}

#[test]
fn test_free_parking_does_nothing() {
    let mut table = Table::new(1);
    let mut parking: Square = FreeParkingSquare::new(11).into();

    table.land(&mut parking, ALICE);

    assert_eq!(table.money(ALICE), 1500);
    assert_eq!(parking.name(), "Free Parking");
    assert_eq!(table.log.len(), 1);
}

#[test]
fn test_only_go_pays_on_pass() {
    let mut table = Table::new(1);
    let mut squares: Vec<Square> = vec![
        PropertySquare::new(2, "Central", 800, 90).into(),
        ChanceSquare::new(9).into(),
        IncomeTaxSquare::new(4).into(),
        GoToJailSquare::new(16).into(),
        FreeParkingSquare::new(11).into(),
    ];

    for square in &mut squares {
        table.pass(square, ALICE);
    }

    assert_eq!(table.money(ALICE), 1500);
    assert!(!table.players[ALICE].is_in_jail());
    assert!(table.log.is_empty());
}

#[test]
fn test_trait_names() {
    assert_eq!(GoSquare::new(1).name(), "Go");
    assert_eq!(JailSquare::new(6).name(), "In Jail/Just Visiting");
    assert_eq!(IncomeTaxSquare::new(4).name(), "Income Tax");
    assert_eq!(FreeParkingSquare::named(3, "Empty").name(), "Empty");
}
