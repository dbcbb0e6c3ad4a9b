use crate::entities::game_events::GameEvent;
use crate::entities::users_games::UserGame;
use crate::models::game_events::{GameEventPayload, PlayerAction};
use crate::models::games::GameRole;
use hashbrown::{HashMap, HashSet};
use rust_decimal::Decimal;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::hash::Hash;

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ModeCount<T> {
    pub mode: T,
    pub count: i64,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct OtherPlayerRanking {
    pub user_id: u64,
    pub count: i64,
    pub percent: Decimal,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct PlayerRanking {
    pub user_id: u64,
    pub win: i64,
    pub total: i64,
    pub win_rate: Decimal,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TeammateOutcome {
    Win,
    Loss,
}

/// A pair of same-role players and how often their shared games ended in
/// the requested outcome. `count` is wins for best-teammate rankings and
/// losses for worst-teammate rankings.
#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct TeammateRanking {
    pub user_id: u64,
    pub teammate_id: u64,
    pub total: i64,
    pub count: i64,
    pub rate: Decimal,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct FirstTargetRanking {
    pub user_id: u64,
    pub total_death: i64,
    pub total: i64,
    pub death_rate: Decimal,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct KilledByRanking {
    pub user_id: u64,
    pub imposter_id: u64,
    pub total_death: i64,
    pub encounter: i64,
    pub death_rate: Decimal,
}

#[derive(Debug, Clone, Eq, PartialEq, Serialize)]
pub struct ActionRanking {
    pub user_id: u64,
    pub total_action: i64,
    pub total: i64,
    pub win_rate: Decimal,
}

/// `part / whole * 100`, or `None` when there is nothing to divide by.
pub fn percentage(part: i64, whole: i64) -> Option<Decimal> {
    if whole <= 0 {
        return None;
    }
    Some(Decimal::from(part) * Decimal::ONE_HUNDRED / Decimal::from(whole))
}

fn mode_ranking<T: Eq + Hash + Ord>(values: impl Iterator<Item = T>) -> Vec<ModeCount<T>> {
    let mut counts: HashMap<T, i64> = HashMap::new();
    for value in values {
        *counts.entry(value).or_default() += 1;
    }
    let mut ranking: Vec<_> = counts
        .into_iter()
        .map(|(mode, count)| ModeCount { mode, count })
        .collect();
    ranking.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.mode.cmp(&b.mode)));
    ranking
}

fn by_game(facts: &[UserGame]) -> BTreeMap<i64, Vec<&UserGame>> {
    let mut games: BTreeMap<i64, Vec<&UserGame>> = BTreeMap::new();
    for fact in facts {
        games.entry(fact.game_id).or_default().push(fact);
    }
    games
}

fn has_role(fact: &UserGame, role: GameRole) -> bool {
    GameRole::from_code(fact.player_role) == Some(role)
}

/// Decodes player-action events, keeping only those with a known user and
/// the requested action.
fn actions_of<'a>(
    events: &'a [GameEvent],
    action: PlayerAction,
) -> impl Iterator<Item = (&'a GameEvent, u64)> + 'a {
    events.iter().filter_map(move |event| {
        let user_id = event.user_id?;
        let payload = GameEventPayload::from_event(event).ok()?;
        (payload.player_action() == Some(action)).then_some((event, user_id))
    })
}

/// Most used colors of one player. `facts` must be that player's rows.
pub fn color_ranking(facts: &[UserGame]) -> Vec<ModeCount<i16>> {
    mode_ranking(facts.iter().map(|fact| fact.player_color))
}

/// Most used display names of one player. `facts` must be that player's rows.
pub fn name_ranking(facts: &[UserGame]) -> Vec<ModeCount<String>> {
    mode_ranking(facts.iter().map(|fact| fact.player_name.clone()))
}

/// Players ordered by number of games played.
pub fn games_played_ranking(facts: &[UserGame]) -> Vec<ModeCount<u64>> {
    mode_ranking(facts.iter().map(|fact| fact.user_id))
}

/// Everyone `user_id` has shared a game with, and what share of the user's
/// games they were in.
pub fn co_participant_ranking(user_id: u64, facts: &[UserGame]) -> Vec<OtherPlayerRanking> {
    let mut user_games = 0;
    let mut shared: BTreeMap<u64, i64> = BTreeMap::new();
    for players in by_game(facts).values() {
        if !players.iter().any(|fact| fact.user_id == user_id) {
            continue;
        }
        user_games += 1;
        let others: HashSet<u64> = players
            .iter()
            .map(|fact| fact.user_id)
            .filter(|&other| other != user_id)
            .collect();
        for other in others {
            *shared.entry(other).or_default() += 1;
        }
    }

    let mut ranking: Vec<_> = shared
        .into_iter()
        .filter_map(|(other, count)| {
            Some(OtherPlayerRanking {
                user_id: other,
                count,
                percent: percentage(count, user_games)?,
            })
        })
        .collect();
    ranking.sort_by(|a, b| {
        b.percent
            .cmp(&a.percent)
            .then_with(|| b.count.cmp(&a.count))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    ranking
}

/// Win rate per player, optionally restricted to games played as `role`.
/// Ordered by win rate only; equal rates keep ascending user id order.
pub fn win_rate_ranking(facts: &[UserGame], role: Option<GameRole>) -> Vec<PlayerRanking> {
    let mut tallies: BTreeMap<u64, (i64, i64)> = BTreeMap::new();
    for fact in facts {
        if role.is_some_and(|role| !has_role(fact, role)) {
            continue;
        }
        let (win, total) = tallies.entry(fact.user_id).or_default();
        *total += 1;
        if fact.player_won {
            *win += 1;
        }
    }

    let mut ranking: Vec<_> = tallies
        .into_iter()
        .filter_map(|(user_id, (win, total))| {
            Some(PlayerRanking {
                user_id,
                win,
                total,
                win_rate: percentage(win, total)?,
            })
        })
        .collect();
    ranking.sort_by(|a, b| b.win_rate.cmp(&a.win_rate));
    ranking
}

#[derive(Default)]
struct PairTally {
    total: i64,
    count: i64,
}

impl PairTally {
    fn record(&mut self, a: &UserGame, b: &UserGame, outcome: TeammateOutcome) {
        self.total += 1;
        let matched = match outcome {
            TeammateOutcome::Win => a.player_won && b.player_won,
            TeammateOutcome::Loss => !a.player_won && !b.player_won,
        };
        if matched {
            self.count += 1;
        }
    }
}

fn finish_teammates(
    tallies: BTreeMap<(u64, u64), PairTally>,
    leaderboard_min: i64,
) -> Vec<TeammateRanking> {
    let mut ranking: Vec<_> = tallies
        .into_iter()
        .filter(|(_, tally)| tally.total >= leaderboard_min)
        .filter_map(|((user_id, teammate_id), tally)| {
            Some(TeammateRanking {
                user_id,
                teammate_id,
                total: tally.total,
                count: tally.count,
                rate: percentage(tally.count, tally.total)?,
            })
        })
        .collect();
    ranking.sort_by(compare_teammates);
    ranking
}

fn compare_teammates(a: &TeammateRanking, b: &TeammateRanking) -> Ordering {
    b.rate
        .cmp(&a.rate)
        .then_with(|| b.count.cmp(&a.count))
        .then_with(|| b.total.cmp(&a.total))
        .then_with(|| (a.user_id, a.teammate_id).cmp(&(b.user_id, b.teammate_id)))
}

/// Same-role teammates of `user_id`, ranked by how often shared games ended
/// in `outcome`. Pairs with fewer than `leaderboard_min` shared games are
/// left out.
pub fn teammate_ranking_for_user(
    user_id: u64,
    facts: &[UserGame],
    role: GameRole,
    outcome: TeammateOutcome,
    leaderboard_min: i64,
) -> Vec<TeammateRanking> {
    let mut tallies: BTreeMap<(u64, u64), PairTally> = BTreeMap::new();
    for players in by_game(facts).values() {
        let Some(user) = players
            .iter()
            .find(|fact| fact.user_id == user_id && has_role(fact, role))
        else {
            continue;
        };
        for teammate in players {
            if teammate.user_id == user_id || !has_role(teammate, role) {
                continue;
            }
            tallies
                .entry((user_id, teammate.user_id))
                .or_default()
                .record(user, teammate, outcome);
        }
    }
    finish_teammates(tallies, leaderboard_min)
}

/// Every same-role pair on a guild. Each unordered pair appears once, with
/// the greater id as `user_id` and the lesser as `teammate_id`.
pub fn teammate_ranking_for_guild(
    facts: &[UserGame],
    role: GameRole,
    outcome: TeammateOutcome,
    leaderboard_min: i64,
) -> Vec<TeammateRanking> {
    let mut tallies: BTreeMap<(u64, u64), PairTally> = BTreeMap::new();
    for players in by_game(facts).values() {
        let team: Vec<&UserGame> = players
            .iter()
            .copied()
            .filter(|fact| has_role(fact, role))
            .collect();
        for (i, a) in team.iter().enumerate() {
            for b in &team[i + 1..] {
                if a.user_id == b.user_id {
                    continue;
                }
                let key = (a.user_id.max(b.user_id), a.user_id.min(b.user_id));
                tallies.entry(key).or_default().record(a, b, outcome);
            }
        }
    }
    finish_teammates(tallies, leaderboard_min)
}

/// Counts, per player, the games in which they were the first to suffer
/// `action`. `events` must be ordered by game, then event time.
fn first_incidents(
    facts: &[UserGame],
    events: &[GameEvent],
    action: PlayerAction,
) -> BTreeMap<u64, i64> {
    let participants: HashSet<(i64, u64)> = facts
        .iter()
        .map(|fact| (fact.game_id, fact.user_id))
        .collect();
    let mut seen_games: HashSet<i64> = HashSet::new();
    let mut incidents: BTreeMap<u64, i64> = BTreeMap::new();
    for (event, user_id) in actions_of(events, action) {
        if !seen_games.insert(event.game_id) {
            continue;
        }
        if participants.contains(&(event.game_id, user_id)) {
            *incidents.entry(user_id).or_default() += 1;
        }
    }
    incidents
}

fn crewmate_game_counts(facts: &[UserGame]) -> HashMap<u64, i64> {
    let mut counts: HashMap<u64, i64> = HashMap::new();
    for fact in facts.iter().filter(|fact| has_role(fact, GameRole::Crewmate)) {
        *counts.entry(fact.user_id).or_default() += 1;
    }
    counts
}

fn first_target_rows(
    facts: &[UserGame],
    events: &[GameEvent],
    action: PlayerAction,
) -> Vec<FirstTargetRanking> {
    let crew_games = crewmate_game_counts(facts);
    first_incidents(facts, events, action)
        .into_iter()
        .filter_map(|(user_id, total_death)| {
            let total = crew_games.get(&user_id).copied().unwrap_or(0);
            Some(FirstTargetRanking {
                user_id,
                total_death,
                total,
                death_rate: percentage(total_death, total)?,
            })
        })
        .collect()
}

/// How often `user_id` was the first player to suffer `action` in a game,
/// relative to their games as a crewmate.
pub fn first_target_ranking_for_user(
    user_id: u64,
    facts: &[UserGame],
    events: &[GameEvent],
    action: PlayerAction,
    leaderboard_size: usize,
) -> Vec<FirstTargetRanking> {
    let mut ranking: Vec<_> = first_target_rows(facts, events, action)
        .into_iter()
        .filter(|row| row.user_id == user_id)
        .collect();
    ranking.sort_by(|a, b| b.total_death.cmp(&a.total_death));
    ranking.truncate(leaderboard_size);
    ranking
}

/// Players most often first to suffer `action`. Players with fewer than
/// `leaderboard_min` crewmate games are left out.
pub fn first_target_ranking_for_guild(
    facts: &[UserGame],
    events: &[GameEvent],
    action: PlayerAction,
    leaderboard_min: i64,
    leaderboard_size: usize,
) -> Vec<FirstTargetRanking> {
    let mut ranking: Vec<_> = first_target_rows(facts, events, action)
        .into_iter()
        .filter(|row| row.total >= leaderboard_min)
        .collect();
    ranking.sort_by(|a, b| {
        b.death_rate
            .cmp(&a.death_rate)
            .then_with(|| b.total_death.cmp(&a.total_death))
            .then_with(|| a.user_id.cmp(&b.user_id))
    });
    ranking.truncate(leaderboard_size);
    ranking
}

fn killed_by_rows(
    user_id: Option<u64>,
    facts: &[UserGame],
    events: &[GameEvent],
) -> Vec<KilledByRanking> {
    let deaths: HashSet<(i64, u64)> = actions_of(events, PlayerAction::Died)
        .map(|(event, user_id)| (event.game_id, user_id))
        .collect();

    let mut tallies: BTreeMap<(u64, u64), (i64, i64)> = BTreeMap::new();
    for (game_id, players) in by_game(facts) {
        let imposters: Vec<u64> = players
            .iter()
            .filter(|fact| has_role(fact, GameRole::Imposter))
            .map(|fact| fact.user_id)
            .collect();
        let crewmates = players.iter().filter(|fact| {
            has_role(fact, GameRole::Crewmate) && user_id.is_none_or(|id| id == fact.user_id)
        });
        for crewmate in crewmates {
            let died = deaths.contains(&(game_id, crewmate.user_id));
            for &imposter in &imposters {
                let (total_death, encounter) =
                    tallies.entry((crewmate.user_id, imposter)).or_default();
                *encounter += 1;
                if died {
                    *total_death += 1;
                }
            }
        }
    }

    tallies
        .into_iter()
        .filter_map(|((user_id, imposter_id), (total_death, encounter))| {
            Some(KilledByRanking {
                user_id,
                imposter_id,
                total_death,
                encounter,
                death_rate: percentage(total_death, encounter)?,
            })
        })
        .collect()
}

fn sort_killed_by(ranking: &mut [KilledByRanking]) {
    ranking.sort_by(|a, b| {
        b.death_rate
            .cmp(&a.death_rate)
            .then_with(|| b.total_death.cmp(&a.total_death))
            .then_with(|| b.encounter.cmp(&a.encounter))
            .then_with(|| (a.user_id, a.imposter_id).cmp(&(b.user_id, b.imposter_id)))
    });
}

/// Imposters `user_id` most often died against while playing crewmate.
pub fn killed_by_ranking_for_user(
    user_id: u64,
    facts: &[UserGame],
    events: &[GameEvent],
) -> Vec<KilledByRanking> {
    let mut ranking = killed_by_rows(Some(user_id), facts, events);
    sort_killed_by(&mut ranking);
    ranking
}

/// Crewmate/imposter pairs across a guild, dropping pairs that met in fewer
/// than `leaderboard_min` games.
pub fn killed_by_ranking_for_guild(
    facts: &[UserGame],
    events: &[GameEvent],
    leaderboard_min: i64,
) -> Vec<KilledByRanking> {
    let mut ranking: Vec<_> = killed_by_rows(None, facts, events)
        .into_iter()
        .filter(|row| row.encounter >= leaderboard_min)
        .collect();
    sort_killed_by(&mut ranking);
    ranking
}

/// How often `user_id` performed `action` across their games as `role`,
/// alongside their win rate in those games.
pub fn action_ranking(
    user_id: u64,
    facts: &[UserGame],
    events: &[GameEvent],
    action: PlayerAction,
    role: GameRole,
) -> Vec<ActionRanking> {
    let games: HashSet<i64> = facts
        .iter()
        .filter(|fact| fact.user_id == user_id && has_role(fact, role))
        .map(|fact| fact.game_id)
        .collect();
    let wins = facts
        .iter()
        .filter(|fact| fact.user_id == user_id && has_role(fact, role) && fact.player_won)
        .count() as i64;
    let total = games.len() as i64;
    let total_action = actions_of(events, action)
        .filter(|(event, actor)| *actor == user_id && games.contains(&event.game_id))
        .count() as i64;

    match percentage(wins, total) {
        Some(win_rate) => vec![ActionRanking {
            user_id,
            total_action,
            total,
            win_rate,
        }],
        None => vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::game_events::GameEventType;

    fn fact(user_id: u64, game_id: i64, role: GameRole, won: bool) -> UserGame {
        UserGame {
            user_id,
            guild_id: 1,
            game_id,
            player_name: format!("player{user_id}"),
            player_color: 0,
            player_role: role.code(),
            player_won: won,
        }
    }

    fn crew(user_id: u64, game_id: i64, won: bool) -> UserGame {
        fact(user_id, game_id, GameRole::Crewmate, won)
    }

    fn imposter(user_id: u64, game_id: i64, won: bool) -> UserGame {
        fact(user_id, game_id, GameRole::Imposter, won)
    }

    fn player_event(
        event_id: i64,
        game_id: i64,
        user_id: u64,
        event_time: i64,
        action: PlayerAction,
    ) -> GameEvent {
        GameEvent {
            event_id,
            user_id: Some(user_id),
            game_id,
            event_time,
            event_type: GameEventType::Player.code(),
            payload: format!(r#"{{"Action":{},"Name":"player{user_id}"}}"#, action.code()),
        }
    }

    fn dec(value: &str) -> Decimal {
        value.parse().unwrap()
    }

    #[test]
    fn percentage_guards_empty_totals() {
        assert_eq!(percentage(1, 0), None);
        assert_eq!(percentage(1, 4), Some(dec("25")));
        assert_eq!(percentage(1, 3), percentage(2, 6));
    }

    #[test]
    fn mode_rankings_order_by_count_then_value() {
        let mut facts: Vec<UserGame> = [1, 1, 2, 3, 3, 3]
            .into_iter()
            .enumerate()
            .map(|(game_id, color)| {
                let mut row = crew(7, game_id as i64, true);
                row.player_color = color;
                row
            })
            .collect();
        assert_eq!(
            color_ranking(&facts),
            vec![
                ModeCount { mode: 3, count: 3 },
                ModeCount { mode: 1, count: 2 },
                ModeCount { mode: 2, count: 1 },
            ]
        );

        facts[0].player_name = "zed".to_owned();
        facts[1].player_name = "amy".to_owned();
        let names = name_ranking(&facts);
        assert_eq!(names[0], ModeCount { mode: "player7".to_owned(), count: 4 });
        assert_eq!(names[1].mode, "amy");
        assert_eq!(names[2].mode, "zed");
    }

    #[test]
    fn games_played_ranking_counts_rows_per_user() {
        let facts = [crew(1, 1, true), crew(2, 1, true), crew(2, 2, false), crew(3, 2, false)];
        let ranking = games_played_ranking(&facts);
        assert_eq!(ranking[0], ModeCount { mode: 2, count: 2 });
        assert_eq!(ranking[1], ModeCount { mode: 1, count: 1 });
        assert_eq!(ranking[2], ModeCount { mode: 3, count: 1 });
    }

    #[test]
    fn co_participants_are_ranked_by_share_of_games() {
        let facts = [
            crew(1, 1, true),
            crew(2, 1, true),
            imposter(3, 1, false),
            crew(1, 2, false),
            crew(2, 2, false),
            crew(4, 3, true),
        ];
        let ranking = co_participant_ranking(1, &facts);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].user_id, 2);
        assert_eq!(ranking[0].count, 2);
        assert_eq!(ranking[0].percent, dec("100"));
        assert_eq!(ranking[1].user_id, 3);
        assert_eq!(ranking[1].percent, dec("50"));
    }

    #[test]
    fn win_rate_ranking_respects_role_filter() {
        let facts = [
            crew(1, 1, true),
            crew(2, 1, false),
            imposter(3, 1, false),
            crew(1, 2, false),
            imposter(2, 2, true),
            crew(3, 2, false),
        ];

        let all = win_rate_ranking(&facts, None);
        let order: Vec<u64> = all.iter().map(|row| row.user_id).collect();
        assert_eq!(order, vec![1, 2, 3]);
        assert_eq!(all[0].win_rate, dec("50"));
        assert_eq!(all[2].win, 0);
        assert_eq!(all[2].total, 2);

        let imposters = win_rate_ranking(&facts, Some(GameRole::Imposter));
        let order: Vec<u64> = imposters.iter().map(|row| row.user_id).collect();
        assert_eq!(order, vec![2, 3]);
        assert_eq!(imposters[0].total, 1);
        assert_eq!(imposters[0].win_rate, dec("100"));
    }

    #[test]
    fn teammates_below_minimum_are_excluded() {
        let facts: Vec<UserGame> = (0..4)
            .flat_map(|game_id| [crew(1, game_id, true), crew(2, game_id, true)])
            .collect();

        let ranking =
            teammate_ranking_for_user(1, &facts, GameRole::Crewmate, TeammateOutcome::Win, 5);
        assert!(ranking.is_empty());
        let ranking =
            teammate_ranking_for_guild(&facts, GameRole::Crewmate, TeammateOutcome::Win, 5);
        assert!(ranking.is_empty());

        let ranking =
            teammate_ranking_for_user(1, &facts, GameRole::Crewmate, TeammateOutcome::Win, 4);
        assert_eq!(
            ranking,
            vec![TeammateRanking {
                user_id: 1,
                teammate_id: 2,
                total: 4,
                count: 4,
                rate: dec("100"),
            }]
        );
    }

    #[test]
    fn best_teammates_break_ties_by_count_then_total() {
        let mut facts = vec![];
        let mut game_id = 0;
        let mut play = |teammate: u64, won: bool, facts: &mut Vec<UserGame>| {
            game_id += 1;
            facts.push(crew(1, game_id, won));
            facts.push(crew(teammate, game_id, won));
        };
        // teammate 5: 1 of 2, teammate 4: 2 of 4, teammate 3: 1 of 1, teammate 2: 2 of 2
        play(5, true, &mut facts);
        play(5, false, &mut facts);
        for won in [true, true, false, false] {
            play(4, won, &mut facts);
        }
        play(3, true, &mut facts);
        play(2, true, &mut facts);
        play(2, true, &mut facts);

        let ranking =
            teammate_ranking_for_user(1, &facts, GameRole::Crewmate, TeammateOutcome::Win, 1);
        let order: Vec<u64> = ranking.iter().map(|row| row.teammate_id).collect();
        assert_eq!(order, vec![2, 3, 4, 5]);
        assert_eq!(ranking[2].rate, dec("50"));
        assert_eq!(ranking[2].count, 2);
        assert_eq!(ranking[2].total, 4);
    }

    #[test]
    fn worst_teammates_count_shared_losses() {
        let facts = [
            crew(1, 1, false),
            crew(2, 1, false),
            imposter(3, 1, true),
            crew(1, 2, true),
            crew(2, 2, true),
        ];
        let ranking =
            teammate_ranking_for_user(1, &facts, GameRole::Crewmate, TeammateOutcome::Loss, 1);
        assert_eq!(ranking.len(), 1);
        assert_eq!(ranking[0].teammate_id, 2);
        assert_eq!(ranking[0].count, 1);
        assert_eq!(ranking[0].total, 2);
        assert_eq!(ranking[0].rate, dec("50"));
    }

    #[test]
    fn guild_teammate_pairs_are_reported_once() {
        let facts: Vec<UserGame> = (0..3)
            .flat_map(|game_id| {
                [
                    crew(1, game_id, true),
                    crew(2, game_id, true),
                    crew(3, game_id, game_id == 0),
                    imposter(4, game_id, false),
                ]
            })
            .collect();

        let ranking =
            teammate_ranking_for_guild(&facts, GameRole::Crewmate, TeammateOutcome::Win, 1);
        let pairs: Vec<(u64, u64)> = ranking
            .iter()
            .map(|row| (row.user_id, row.teammate_id))
            .collect();
        assert_eq!(pairs, vec![(2, 1), (3, 1), (3, 2)]);
        for (user_id, teammate_id) in &pairs {
            assert!(user_id > teammate_id);
            assert!(!pairs.contains(&(*teammate_id, *user_id)));
        }
        assert_eq!(ranking[0].count, 3);
        assert_eq!(ranking[1].count, 1);
        assert_eq!(ranking[1].total, 3);
    }

    #[test]
    fn first_targets_use_the_earliest_incident_per_game() {
        let facts: Vec<UserGame> = (1..=3)
            .flat_map(|game_id| {
                [
                    crew(2, game_id, false),
                    crew(3, game_id, false),
                    imposter(9, game_id, true),
                ]
            })
            .collect();
        let events = [
            player_event(1, 1, 3, 5, PlayerAction::Exiled),
            player_event(2, 1, 2, 10, PlayerAction::Died),
            player_event(3, 1, 3, 20, PlayerAction::Died),
            player_event(4, 2, 2, 10, PlayerAction::Died),
            player_event(5, 3, 3, 15, PlayerAction::Died),
            player_event(6, 3, 2, 25, PlayerAction::Died),
        ];

        let ranking =
            first_target_ranking_for_guild(&facts, &events, PlayerAction::Died, 3, 10);
        assert_eq!(ranking.len(), 2);
        assert_eq!(ranking[0].user_id, 2);
        assert_eq!(ranking[0].total_death, 2);
        assert_eq!(ranking[0].total, 3);
        assert_eq!(ranking[0].death_rate, percentage(2, 3).unwrap());
        assert_eq!(ranking[1].user_id, 3);
        assert_eq!(ranking[1].total_death, 1);

        let ranking = first_target_ranking_for_guild(&facts, &events, PlayerAction::Died, 4, 10);
        assert!(ranking.is_empty());
        assert_eq!(
            first_target_ranking_for_guild(&facts, &events, PlayerAction::Died, 0, 1).len(),
            1
        );

        let mine = first_target_ranking_for_user(3, &facts, &events, PlayerAction::Died, 5);
        assert_eq!(mine.len(), 1);
        assert_eq!(mine[0].user_id, 3);
        assert_eq!(mine[0].total_death, 1);

        let exiled = first_target_ranking_for_user(3, &facts, &events, PlayerAction::Exiled, 5);
        assert_eq!(exiled[0].total_death, 1);
        assert_eq!(exiled[0].death_rate, percentage(1, 3).unwrap());
    }

    #[test]
    fn equal_first_target_rates_order_by_deaths() {
        let facts = [
            crew(5, 1, false),
            crew(6, 1, false),
            crew(5, 2, true),
            crew(6, 2, true),
            crew(6, 3, false),
            crew(6, 4, false),
        ];
        let events = [
            player_event(1, 1, 5, 10, PlayerAction::Died),
            player_event(2, 1, 6, 20, PlayerAction::Died),
            player_event(3, 3, 6, 10, PlayerAction::Died),
            player_event(4, 4, 6, 10, PlayerAction::Died),
        ];

        let ranking = first_target_ranking_for_guild(&facts, &events, PlayerAction::Died, 0, 10);
        let order: Vec<(u64, i64, i64)> = ranking
            .iter()
            .map(|row| (row.user_id, row.total_death, row.total))
            .collect();
        assert_eq!(order, vec![(6, 2, 4), (5, 1, 2)]);
        assert_eq!(ranking[0].death_rate, ranking[1].death_rate);
    }

    #[test]
    fn equal_killed_by_rows_order_by_encounters() {
        let facts = [
            crew(1, 1, true),
            imposter(9, 1, false),
            crew(1, 2, true),
            imposter(9, 2, false),
            crew(1, 3, true),
            imposter(8, 3, false),
        ];

        let ranking = killed_by_ranking_for_user(1, &facts, &[]);
        let order: Vec<(u64, i64)> = ranking
            .iter()
            .map(|row| (row.imposter_id, row.encounter))
            .collect();
        assert_eq!(order, vec![(9, 2), (8, 1)]);
        assert!(ranking.iter().all(|row| row.total_death == 0));
    }

    #[test]
    fn per_user_rankings_only_need_the_users_games() {
        let facts = [
            crew(1, 1, true),
            crew(2, 1, true),
            imposter(9, 1, false),
            crew(2, 2, false),
            crew(3, 2, false),
            imposter(9, 2, true),
            crew(1, 3, false),
            crew(3, 3, false),
            imposter(8, 3, true),
        ];
        let events = [
            player_event(1, 1, 2, 10, PlayerAction::Died),
            player_event(2, 2, 3, 10, PlayerAction::Died),
            player_event(3, 3, 1, 10, PlayerAction::Died),
            player_event(4, 3, 3, 20, PlayerAction::Died),
        ];
        let shared: Vec<UserGame> = facts
            .iter()
            .filter(|fact| fact.game_id != 2)
            .cloned()
            .collect();
        let shared_events: Vec<GameEvent> = events
            .iter()
            .filter(|event| event.game_id != 2)
            .cloned()
            .collect();
        let own_events: Vec<GameEvent> = events
            .iter()
            .filter(|event| event.user_id == Some(1))
            .cloned()
            .collect();
        let crewmate = GameRole::Crewmate;
        let died = PlayerAction::Died;

        assert_eq!(
            co_participant_ranking(1, &shared),
            co_participant_ranking(1, &facts)
        );
        assert_eq!(
            teammate_ranking_for_user(1, &shared, crewmate, TeammateOutcome::Win, 1),
            teammate_ranking_for_user(1, &facts, crewmate, TeammateOutcome::Win, 1)
        );
        assert_eq!(
            first_target_ranking_for_user(1, &shared, &shared_events, died, 5),
            first_target_ranking_for_user(1, &facts, &events, died, 5)
        );
        assert_eq!(
            killed_by_ranking_for_user(1, &shared, &own_events),
            killed_by_ranking_for_user(1, &facts, &events)
        );
        assert!(!killed_by_ranking_for_user(1, &facts, &events).is_empty());
    }

    #[test]
    fn killed_by_ranks_imposters_by_death_rate() {
        let facts = [
            crew(1, 1, false),
            imposter(9, 1, true),
            crew(1, 2, true),
            imposter(9, 2, false),
            crew(1, 3, false),
            imposter(8, 3, true),
            crew(2, 3, true),
        ];
        let events = [
            player_event(1, 1, 1, 30, PlayerAction::Died),
            player_event(2, 3, 1, 40, PlayerAction::Died),
        ];

        let ranking = killed_by_ranking_for_user(1, &facts, &events);
        let imposters: Vec<u64> = ranking.iter().map(|row| row.imposter_id).collect();
        assert_eq!(imposters, vec![8, 9]);
        assert_eq!(ranking[0].death_rate, dec("100"));
        assert_eq!(ranking[1].total_death, 1);
        assert_eq!(ranking[1].encounter, 2);
        assert_eq!(ranking[1].death_rate, dec("50"));

        let guild = killed_by_ranking_for_guild(&facts, &events, 2);
        assert_eq!(guild.len(), 1);
        assert_eq!((guild[0].user_id, guild[0].imposter_id), (1, 9));

        let guild = killed_by_ranking_for_guild(&facts, &events, 1);
        assert_eq!(guild.len(), 3);
        assert_eq!(guild.last().map(|row| row.user_id), Some(2));
    }

    #[test]
    fn action_ranking_counts_own_actions_in_role_games() {
        let facts = [
            imposter(1, 1, true),
            imposter(1, 2, false),
            crew(1, 3, false),
            crew(2, 1, false),
        ];
        let events = [
            player_event(1, 1, 1, 10, PlayerAction::Disconnected),
            player_event(2, 3, 1, 10, PlayerAction::Disconnected),
            player_event(3, 1, 2, 12, PlayerAction::Disconnected),
        ];

        let ranking =
            action_ranking(1, &facts, &events, PlayerAction::Disconnected, GameRole::Imposter);
        assert_eq!(
            ranking,
            vec![ActionRanking {
                user_id: 1,
                total_action: 1,
                total: 2,
                win_rate: dec("50"),
            }]
        );
        let ranking = action_ranking(3, &facts, &events, PlayerAction::Died, GameRole::Crewmate);
        assert!(ranking.is_empty());
    }
}
