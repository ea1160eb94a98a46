//! Match engine integration tests.

use watten::{
    Card, CardError, DECK_SIZE, DealError, Deck, HAND_SIZE, JoinError, Match, MatchOptions,
    MatchPhase, PlayError, Rank, RankOrdering, ScoreError, Seat, Suit, Team, compute_trump,
    legal_plays, resolve_trick,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::from_parts(suit, rank)
}

const fn seat(index: usize) -> Seat {
    Seat::ALL[index]
}

const NAMES: [&str; 4] = ["Marcel", "Thomas", "Daniel", "Christoph"];

fn seated(options: MatchOptions, seed: u64) -> Match {
    let mut game = Match::new(options, seed);
    for name in NAMES {
        game.join(name).unwrap();
    }
    game
}

/// Stacks a deck so that each seat in turn order receives the given hand.
fn arranged(hands: [[Card; HAND_SIZE]; 4]) -> Deck {
    let dealt: Vec<Card> = hands.iter().flatten().copied().collect();
    let mut cards: Vec<Card> = hands.iter().flat_map(|hand| hand[..3].to_vec()).collect();
    cards.extend(hands.iter().flat_map(|hand| hand[3..].to_vec()));
    cards.extend(Card::all().filter(|card| !dealt.contains(card)));
    Deck::from_cards(cards)
}

/// Trump Eichel Ober; seats 0 and 3 are informed.
fn scripted_hands() -> [[Card; HAND_SIZE]; 4] {
    use Rank::*;
    use Suit::*;
    [
        [
            card(Herz, Ober),
            card(Laub, Sau),
            card(Laub, Ten),
            card(Schell, Eight),
            card(Schell, Nine),
        ],
        [
            card(Laub, Seven),
            card(Laub, Eight),
            card(Herz, Seven),
            card(Herz, Eight),
            card(Herz, Nine),
        ],
        [
            card(Eichel, Sau),
            card(Eichel, Ten),
            card(Laub, Nine),
            card(Schell, Ten),
            card(Schell, Unter),
        ],
        [
            card(Eichel, Nine),
            card(Eichel, Seven),
            card(Eichel, Eight),
            card(Herz, Ten),
            card(Herz, Unter),
        ],
    ]
}

fn cards_in_play(game: &Match) -> usize {
    let held: usize = Seat::ALL.iter().map(|&seat| game.hand(seat).len()).sum();
    held + game.pile().len() + game.deck().len()
}

/// Plays the first legal card for every turn until the point is over.
fn play_out_point(game: &mut Match) {
    while let Some(seat) = game.current_player() {
        let card = game.legal_plays(seat)[0];
        game.play_card(seat, card).unwrap();
        assert_eq!(cards_in_play(game), DECK_SIZE);
    }
}

#[test]
fn card_identifiers_and_weli() {
    assert_eq!(Card::new(33), Err(CardError::InvalidCard(33)));
    assert_eq!(Card::try_from(-1i16), Err(CardError::InvalidCard(-1)));
    assert_eq!(Card::try_from(32i16), Ok(Card::WELI));

    let schell_seven = card(Suit::Schell, Rank::Seven);
    assert!(Card::WELI.is_weli());
    assert_eq!(Card::WELI.suit(), Suit::Schell);
    assert_eq!(Card::WELI.rank(), Rank::Seven);
    assert_ne!(Card::WELI, schell_seven);
    assert!(!Card::WELI.identical(schell_seven));
    assert!(Card::WELI.same_suit(schell_seven));

    assert_eq!(Card::all().count(), DECK_SIZE);
    assert_eq!(card(Suit::Laub, Rank::Sau).id(), 31);
    assert_eq!(card(Suit::Eichel, Rank::Ober).to_string(), "Eichel Ober");
    assert_eq!(Card::WELI.to_string(), "Weli");
}

#[test]
fn rank_comparison_is_defined_within_a_suit_only() {
    let herz_sau = card(Suit::Herz, Rank::Sau);
    let herz_unter = card(Suit::Herz, Rank::Unter);
    let laub_seven = card(Suit::Laub, Rank::Seven);

    assert_eq!(herz_sau.compare_rank(herz_unter), RankOrdering::Greater);
    assert_eq!(herz_unter.compare_rank(herz_sau), RankOrdering::Less);
    assert_eq!(herz_sau.compare_rank(herz_sau), RankOrdering::Equal);
    assert_eq!(herz_sau.compare_rank(laub_seven), RankOrdering::Incomparable);
    assert_eq!(
        Card::WELI.compare_rank(card(Suit::Schell, Rank::Eight)),
        RankOrdering::Less
    );
}

#[test]
fn deal_top_takes_from_the_front_and_rejects_overdraw() {
    let mut deck = Deck::from_cards(Card::all().collect());
    assert!(deck.is_full());

    let top = deck.deal_top(5).unwrap();
    assert_eq!(top, (0..5).map(|id| Card::new(id).unwrap()).collect::<Vec<_>>());
    assert_eq!(deck.len(), 28);

    assert_eq!(
        deck.deal_top(29),
        Err(DealError::EmptyDeck {
            requested: 29,
            remaining: 28
        })
    );
    assert_eq!(deck.len(), 28);
    assert_eq!(deck.deal_top(28).unwrap().len(), 28);
    assert!(deck.is_empty());
}

#[test]
fn trump_takes_suit_from_last_player_and_rank_from_first() {
    let first = card(Suit::Herz, Rank::Ober);
    let last = card(Suit::Eichel, Rank::Nine);
    let trump = compute_trump(first, last);
    assert!(trump.identical(Card::new(21).unwrap()));
    assert_eq!(trump.suit().index(), 2);
    assert_eq!(trump.rank().index(), 5);
}

#[test]
fn rechter_wins_wherever_it_is_played() {
    let trump = card(Suit::Laub, Rank::Koenig);
    let mut played = [
        card(Suit::Herz, Rank::Koenig),
        card(Suit::Laub, Rank::Sau),
        card(Suit::Schell, Rank::Koenig),
        card(Suit::Laub, Rank::Koenig),
    ];
    assert_eq!(resolve_trick(&played, trump), Some(3));
    played.swap(0, 3);
    assert_eq!(resolve_trick(&played, trump), Some(0));
}

#[test]
fn earliest_rechter_wins_when_weli_doubles_schell_seven() {
    let trump = card(Suit::Schell, Rank::Seven);
    let played = [
        card(Suit::Laub, Rank::Sau),
        Card::WELI,
        card(Suit::Schell, Rank::Seven),
        card(Suit::Herz, Rank::Seven),
    ];
    assert_eq!(resolve_trick(&played, trump), Some(1));

    let played = [
        card(Suit::Schell, Rank::Seven),
        Card::WELI,
        card(Suit::Laub, Rank::Sau),
        card(Suit::Herz, Rank::Seven),
    ];
    assert_eq!(resolve_trick(&played, trump), Some(0));
}

#[test]
fn power_rank_beats_everything_but_the_rechter() {
    let trump = card(Suit::Herz, Rank::Unter);

    let played = [
        card(Suit::Herz, Rank::Sau),
        card(Suit::Laub, Rank::Unter),
        card(Suit::Schell, Rank::Unter),
        card(Suit::Herz, Rank::Koenig),
    ];
    assert_eq!(resolve_trick(&played, trump), Some(1));

    let played = [
        card(Suit::Eichel, Rank::Unter),
        card(Suit::Laub, Rank::Unter),
        card(Suit::Herz, Rank::Sau),
        card(Suit::Laub, Rank::Sau),
    ];
    assert_eq!(resolve_trick(&played, trump), Some(0));
}

#[test]
fn off_suit_cards_never_take_the_lead() {
    let trump = card(Suit::Herz, Rank::Unter);

    let played = [
        card(Suit::Laub, Rank::Nine),
        card(Suit::Schell, Rank::Sau),
        card(Suit::Eichel, Rank::Sau),
        card(Suit::Laub, Rank::Seven),
    ];
    assert_eq!(resolve_trick(&played, trump), Some(0));

    let played = [
        card(Suit::Laub, Rank::Nine),
        card(Suit::Laub, Rank::Koenig),
        card(Suit::Laub, Rank::Ten),
        card(Suit::Schell, Rank::Sau),
    ];
    assert_eq!(resolve_trick(&played, trump), Some(1));

    let played = [
        card(Suit::Laub, Rank::Sau),
        card(Suit::Herz, Rank::Seven),
        card(Suit::Herz, Rank::Eight),
        card(Suit::Laub, Rank::Koenig),
    ];
    assert_eq!(resolve_trick(&played, trump), Some(2));

    assert_eq!(resolve_trick(&[], trump), None);
}

#[test]
fn legal_plays_only_restrict_informed_players_facing_trump() {
    let trump = card(Suit::Eichel, Rank::Ober);
    let hand = [
        card(Suit::Eichel, Rank::Seven),
        card(Suit::Herz, Rank::Sau),
        card(Suit::Eichel, Rank::Sau),
    ];
    let trump_lead = [card(Suit::Eichel, Rank::Ten)];
    let other_lead = [card(Suit::Herz, Rank::Ten)];

    assert_eq!(legal_plays(&hand, &[], trump, true), hand);
    assert_eq!(legal_plays(&hand, &other_lead, trump, true), hand);
    assert_eq!(legal_plays(&hand, &trump_lead, trump, false), hand);
    assert_eq!(
        legal_plays(&hand, &trump_lead, trump, true),
        [hand[0], hand[2]]
    );

    let no_trump = [card(Suit::Herz, Rank::Sau), card(Suit::Laub, Rank::Nine)];
    assert_eq!(legal_plays(&no_trump, &trump_lead, trump, true), no_trump);
}

#[test]
fn joining_fills_four_seats_then_deals() {
    let mut game = Match::new(MatchOptions::default(), 1);
    assert_eq!(game.deal(), Err(DealError::InvalidState));

    assert_eq!(game.join("Marcel"), Ok(seat(0)));
    assert_eq!(game.join("Marcel"), Err(JoinError::DuplicateName));
    assert_eq!(game.join("Thomas"), Ok(seat(1)));
    assert_eq!(game.join("Daniel"), Ok(seat(2)));
    assert_eq!(game.phase(), MatchPhase::AwaitingPlayers);
    assert_eq!(game.join("Christoph"), Ok(seat(3)));
    assert_eq!(game.phase(), MatchPhase::Dealing);
    assert_eq!(game.join("Sepp"), Err(JoinError::InvalidState));

    assert_eq!(game.players(), NAMES);
    assert_eq!(game.seat_of("Daniel"), Some(seat(2)));
    assert_eq!(game.player_name(seat(3)), Some("Christoph"));
    assert_eq!(seat(0).team(), Team::One);
    assert_eq!(seat(3).team(), Team::Two);
}

#[test]
fn deal_hands_out_five_cards_and_informs_first_and_last() {
    let mut game = seated(MatchOptions::default(), 3);
    let deal = game.deal_from(arranged(scripted_hands())).unwrap();

    assert_eq!(deal.trump, card(Suit::Eichel, Rank::Ober));
    assert_eq!(deal.informed, [seat(0), seat(3)]);
    assert!(game.is_informed(seat(0)));
    assert!(!game.is_informed(seat(1)));
    assert_eq!(game.phase(), MatchPhase::TrickPlay);
    assert_eq!(game.current_player(), Some(seat(0)));

    for (index, hand) in scripted_hands().iter().enumerate() {
        assert_eq!(game.hand(seat(index)), hand);
    }
    assert_eq!(game.deck().len(), DECK_SIZE - 4 * HAND_SIZE);
    assert_eq!(cards_in_play(&game), DECK_SIZE);
    assert_eq!(game.deal(), Err(DealError::InvalidState));
}

#[test]
fn short_deck_is_rejected_without_dealing() {
    let mut game = seated(MatchOptions::default(), 3);
    let short = Deck::from_cards(Card::all().take(19).collect());
    assert_eq!(
        game.deal_from(short),
        Err(DealError::EmptyDeck {
            requested: 20,
            remaining: 19
        })
    );
    assert_eq!(game.phase(), MatchPhase::Dealing);
    assert!(game.hand(seat(0)).is_empty());
}

#[test]
fn scripted_tricks_move_the_lead_to_the_winner() {
    use Rank::*;
    use Suit::*;

    let mut game = seated(MatchOptions::default(), 3);
    game.deal_from(arranged(scripted_hands())).unwrap();

    // Eichel is the trump suit, so Daniel's Eichel Ten takes the Laub lead.
    game.play_card(seat(0), card(Laub, Sau)).unwrap();
    game.play_card(seat(1), card(Laub, Seven)).unwrap();
    game.play_card(seat(2), card(Eichel, Ten)).unwrap();
    let outcome = game.play_card(seat(3), card(Herz, Ten)).unwrap();
    let trick = outcome.completed.unwrap();
    assert_eq!(trick.winner.seat, seat(2));
    assert_eq!(trick.tricks, [1, 0]);
    assert_eq!(trick.plays.len(), 4);
    assert_eq!(game.lead(), seat(2));
    assert!(game.current_trick().is_empty());
    assert_eq!(game.pile().len(), 4);

    assert_eq!(
        game.play_card(seat(0), card(Herz, Ober)),
        Err(PlayError::NotYourTurn)
    );
    assert_eq!(
        game.play_card(seat(2), card(Laub, Sau)),
        Err(PlayError::NotInHand)
    );

    let outcome = game.play_card(seat(2), card(Eichel, Sau)).unwrap();
    assert_eq!(outcome.played.len(), 1);
    assert!(outcome.completed.is_none());

    // Christoph is informed and must follow the trump suit.
    let before = game.hand(seat(3)).to_vec();
    assert_eq!(
        game.legal_plays(seat(3)),
        [card(Eichel, Nine), card(Eichel, Seven), card(Eichel, Eight)]
    );
    assert_eq!(
        game.play_card(seat(3), card(Herz, Unter)),
        Err(PlayError::IllegalPlay)
    );
    assert_eq!(game.hand(seat(3)), before);
    assert_eq!(game.current_player(), Some(seat(3)));

    // Marcel holds no Eichel and may play anything; his Ober has the power rank.
    game.play_card(seat(3), card(Eichel, Seven)).unwrap();
    assert_eq!(game.legal_plays(seat(0)), game.hand(seat(0)));
    game.play_card(seat(0), card(Herz, Ober)).unwrap();
    let trick = game
        .play_card(seat(1), card(Herz, Seven))
        .unwrap()
        .completed
        .unwrap();
    assert_eq!(trick.winner.seat, seat(0));
    assert_eq!(trick.tricks, [2, 0]);
    assert_eq!(game.lead(), seat(0));
    assert_eq!(game.tricks_played(), 2);
}

#[test]
fn a_point_is_five_tricks_and_awards_two() {
    let mut game = seated(MatchOptions::default(), 11);
    assert_eq!(game.score_point(), Err(ScoreError::InvalidState));
    game.deal().unwrap();
    assert_eq!(game.score_point(), Err(ScoreError::InvalidState));

    play_out_point(&mut game);
    assert_eq!(game.phase(), MatchPhase::PointScoring);
    assert_eq!(game.tricks_played(), 5);
    assert!(Seat::ALL.iter().all(|&seat| game.hand(seat).is_empty()));
    assert_eq!(game.pile().len(), 20);
    assert_eq!(
        game.play_card(seat(0), card(Suit::Laub, Rank::Sau)),
        Err(PlayError::InvalidState)
    );

    let point = game.score_point().unwrap();
    assert_eq!(point.tricks[0] + point.tricks[1], 5);
    assert!(point.tricks[point.winner.index()] >= 3);
    assert_eq!(point.points[point.winner.index()], 2);
    assert_eq!(point.points[point.winner.opponent().index()], 0);
    assert!(!point.round_over);
    assert_eq!(game.phase(), MatchPhase::Dealing);
    assert_eq!(game.trump(), None);
    assert_eq!(game.score(point.winner).tricks, 0);
}

#[test]
fn rounds_end_at_the_target_and_losers_lead_next() {
    let mut game = seated(MatchOptions::default(), 5);
    let mut points_played = 0;

    let point = loop {
        game.deal().unwrap();
        play_out_point(&mut game);
        let point = game.score_point().unwrap();
        points_played += 1;
        assert!(points_played <= 11);
        if point.round_over {
            break point;
        }
        assert!(point.points.iter().all(|&points| points < 11));
    };
    assert_eq!(game.phase(), MatchPhase::RoundScoring);
    assert_eq!(point.points[point.winner.index()], 12);
    assert_eq!(game.deal(), Err(DealError::InvalidState));

    let round = game.score_round().unwrap();
    assert_eq!(round.winner, point.winner);
    assert_eq!(round.rounds[round.winner.index()], 1);
    assert_eq!(round.rounds[round.winner.opponent().index()], 0);
    assert_eq!(round.next_lead.team(), round.winner.opponent());
    assert_eq!(game.lead(), round.next_lead);
    assert_eq!(game.phase(), MatchPhase::Dealing);
    assert!(Team::ALL.iter().all(|&team| game.score(team).points == 0));
    assert_eq!(game.score_round(), Err(ScoreError::InvalidState));

    game.deal().unwrap();
    assert_eq!(game.current_player(), Some(round.next_lead));
}

#[test]
fn custom_targets_shorten_the_round() {
    let options = MatchOptions::default()
        .with_target_points(3)
        .with_point_award(3);
    let mut game = seated(options, 9);
    game.deal().unwrap();
    play_out_point(&mut game);

    let point = game.score_point().unwrap();
    assert_eq!(point.points[point.winner.index()], 3);
    assert!(point.round_over);
    assert_eq!(game.score_round().unwrap().winner, point.winner);
}

#[test]
fn same_seed_replays_the_same_match() {
    let mut first = seated(MatchOptions::default(), 77);
    let mut second = seated(MatchOptions::default(), 77);
    for _ in 0..3 {
        assert_eq!(first.deal(), second.deal());
        for seat in Seat::ALL {
            assert_eq!(first.hand(seat), second.hand(seat));
        }
        play_out_point(&mut first);
        play_out_point(&mut second);
        assert_eq!(first.score_point(), second.score_point());
    }
}
