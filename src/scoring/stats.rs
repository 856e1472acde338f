// src/scoring/stats.rs
//
// Folds a completed match into the cumulative team and player records.
use std::collections::HashMap;

use uuid::Uuid;

use crate::models::matches::Match;
use crate::models::player::Player;
use crate::models::scoring::{BallRecord, PlayerMatchStats};
use crate::models::team::Team;

/// Update both teams' win/loss ledgers from a settled match.
pub fn fold_match_into_team(m: &Match, team: &mut Team) {
    team.matches += 1;
    match m.winner {
        Some(winner) if winner == team.id => team.wins += 1,
        Some(_) => team.losses += 1,
        // A tie counts as a match played for both sides, nothing more.
        None => {}
    }
}

/// Merge one player's match tallies into their career record.
pub fn fold_match_into_player(stats: &PlayerMatchStats, maidens: i32, player: &mut Player) {
    player.matches += 1;

    player.runs += stats.runs;
    player.balls_faced += stats.balls_faced;
    player.fours += stats.fours;
    player.sixes += stats.sixes;
    if stats.runs > player.high_score {
        player.high_score = stats.runs;
    }
    if stats.runs >= 100 {
        player.hundreds += 1;
    } else if stats.runs >= 50 {
        player.fifties += 1;
    }

    player.wickets += stats.wickets;
    player.balls_bowled += stats.balls_bowled;
    player.runs_conceded += stats.runs_conceded;
    player.maidens += maidens;

    if stats.balls_bowled > 0 {
        let figures = (stats.wickets, stats.runs_conceded);
        if is_better_bowling(figures, parse_bowling_figures(&player.best_bowling)) {
            player.best_bowling = format!("{}/{}", figures.0, figures.1);
        }
    }
}

/// Count the maiden overs a bowler sent down: six legal deliveries, nothing
/// charged to the bowler off any of them.
pub fn maidens_bowled(log: &[BallRecord], bowler: Uuid) -> i32 {
    let mut overs: HashMap<(i32, u32), (u32, i32)> = HashMap::new();

    for record in log.iter().filter(|r| r.bowler_id == Some(bowler)) {
        let entry = overs.entry((record.innings, record.over)).or_default();
        let legal = record.extra.map_or(true, |e| e.is_legal_delivery());
        if legal {
            entry.0 += 1;
        }
        let conceded = match record.extra {
            None => record.runs,
            Some(e) if e.charged_to_bowler() => record.runs,
            Some(_) => 0,
        };
        entry.1 += conceded;
    }

    overs
        .values()
        .filter(|(balls, conceded)| *balls == 6 && *conceded == 0)
        .count() as i32
}

/// "3/21"-style figures, compared by wickets first, then fewer runs.
fn parse_bowling_figures(s: &str) -> (i32, i32) {
    let mut parts = s.splitn(2, '/');
    let wickets = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    let runs = parts.next().and_then(|p| p.trim().parse().ok()).unwrap_or(0);
    (wickets, runs)
}

fn is_better_bowling(candidate: (i32, i32), best: (i32, i32)) -> bool {
    if best == (0, 0) {
        // "0/0" is the unset sentinel, any real spell beats it.
        return true;
    }
    candidate.0 > best.0 || (candidate.0 == best.0 && candidate.1 < best.1)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::player::{NewPlayer, PlayerRole};
    use crate::models::scoring::ExtraKind;
    use crate::store::{CricketStore, MemStore};
    use chrono::Utc;

    fn some_player() -> Player {
        let store = MemStore::new();
        store.create_player(NewPlayer {
            name: "Meena".to_string(),
            role: PlayerRole::AllRounder,
            team_id: None,
        })
    }

    fn record(innings: i32, over: u32, ball: u32, runs: i32, extra: Option<ExtraKind>, bowler: Uuid) -> BallRecord {
        BallRecord {
            innings,
            over,
            ball,
            runs,
            extra,
            wicket: None,
            batsman_id: None,
            bowler_id: Some(bowler),
            timestamp: Utc::now(),
        }
    }

    #[test]
    fn test_half_century_updates_milestones_and_high_score() {
        let mut player = some_player();
        let stats = PlayerMatchStats {
            runs: 61,
            balls_faced: 40,
            fours: 7,
            sixes: 2,
            ..Default::default()
        };
        fold_match_into_player(&stats, 0, &mut player);

        assert_eq!(player.matches, 1);
        assert_eq!(player.runs, 61);
        assert_eq!(player.fifties, 1);
        assert_eq!(player.hundreds, 0);
        assert_eq!(player.high_score, 61);

        // A lower score later does not regress the high score.
        let quiet = PlayerMatchStats {
            runs: 12,
            balls_faced: 9,
            ..Default::default()
        };
        fold_match_into_player(&quiet, 0, &mut player);
        assert_eq!(player.high_score, 61);
        assert_eq!(player.fifties, 1);
    }

    #[test]
    fn test_best_bowling_prefers_wickets_then_economy() {
        let mut player = some_player();
        let spell = PlayerMatchStats {
            wickets: 2,
            balls_bowled: 24,
            runs_conceded: 30,
            ..Default::default()
        };
        fold_match_into_player(&spell, 0, &mut player);
        assert_eq!(player.best_bowling, "2/30");

        let cheaper_two = PlayerMatchStats {
            wickets: 2,
            balls_bowled: 24,
            runs_conceded: 18,
            ..Default::default()
        };
        fold_match_into_player(&cheaper_two, 0, &mut player);
        assert_eq!(player.best_bowling, "2/18");

        let worse = PlayerMatchStats {
            wickets: 1,
            balls_bowled: 12,
            runs_conceded: 5,
            ..Default::default()
        };
        fold_match_into_player(&worse, 0, &mut player);
        assert_eq!(player.best_bowling, "2/18");
    }

    #[test]
    fn test_maiden_requires_six_scoreless_legal_balls() {
        let bowler = Uuid::new_v4();
        let mut log = Vec::new();
        // Over 0: six dots with a leg bye in the middle, still a maiden.
        for ball in 1..=6 {
            let extra = if ball == 3 { Some(ExtraKind::LegBye) } else { None };
            let runs = if ball == 3 { 1 } else { 0 };
            log.push(record(1, 0, ball, runs, extra, bowler));
        }
        // Over 1: a wide spoils it.
        for ball in 1..=6 {
            log.push(record(1, 1, ball, 0, None, bowler));
        }
        log.push(record(1, 1, 6, 1, Some(ExtraKind::Wide), bowler));

        assert_eq!(maidens_bowled(&log, bowler), 1);
        assert_eq!(maidens_bowled(&log, Uuid::new_v4()), 0);
    }

    #[test]
    fn test_team_ledgers_fold_from_winner() {
        let store = MemStore::new();
        let mut alpha = store.create_team(crate::models::team::NewTeam {
            name: "Alpha".to_string(),
            short_name: "ALP".to_string(),
        });
        let mut beta = store.create_team(crate::models::team::NewTeam {
            name: "Beta".to_string(),
            short_name: "BET".to_string(),
        });
        let mut m = store.create_match(crate::models::matches::NewMatch {
            team1_id: alpha.id,
            team2_id: beta.id,
            team1_name: alpha.name.clone(),
            team2_name: beta.name.clone(),
            format: crate::models::matches::MatchFormat::T20,
            venue: None,
            date: None,
            toss_winner: None,
            toss_decision: None,
        });
        m.winner = Some(alpha.id);

        fold_match_into_team(&m, &mut alpha);
        fold_match_into_team(&m, &mut beta);
        assert_eq!((alpha.matches, alpha.wins, alpha.losses), (1, 1, 0));
        assert_eq!((beta.matches, beta.wins, beta.losses), (1, 0, 1));
    }
}
