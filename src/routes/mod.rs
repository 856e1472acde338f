use actix_web::web;

pub mod backend_health;
pub mod matches;
pub mod players;
pub mod sync;
pub mod teams;

pub fn init_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(backend_health::backend_health);

    cfg.service(
        web::scope("/api")
            .service(teams::list_teams)
            .service(teams::create_team)
            .service(teams::get_team)
            .service(teams::update_team)
            .service(teams::delete_team)
            .service(teams::get_team_players)
            .service(teams::get_team_matches)
            .service(players::list_players)
            .service(players::create_player)
            .service(players::get_player)
            .service(players::update_player)
            .service(players::delete_player)
            .service(matches::list_matches)
            .service(matches::create_match)
            .service(matches::get_match)
            .service(matches::update_match)
            .service(matches::delete_match)
            .service(matches::start_match)
            .service(matches::record_ball)
            .service(matches::end_innings)
            .service(matches::complete_match)
            .service(sync::export_data)
            .service(sync::import_data)
            .service(sync::reconcile)
            .service(sync::replay),
    );
}
