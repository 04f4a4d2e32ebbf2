//! Home page assembly
//!
//! Catalog rails first, then the viewer's personal rails (continue
//! watching, watchlist, favorites). Every rail degrades to empty on its
//! own, so a partial catalog still renders a page.

use axum::{Json, extract::State};
use axum_extra::extract::cookie::CookieJar;

use client::tmdb::{MediaType, TrendingKind};

use crate::cookies::sync_jar;
use crate::handlers::media_rail;
use crate::state::AppState;
use crate::views::{HomePage, Rail};

/// Assemble the home page rails
pub async fn home(State(state): State<AppState>, jar: CookieJar) -> (CookieJar, Json<HomePage>) {
    let api = state.api(&jar);
    let tmdb = state.tmdb();

    let (trending, popular_movies, top_movies, popular_series) = tokio::join!(
        tmdb.trending(TrendingKind::All),
        tmdb.popular(MediaType::Movie, 1),
        tmdb.top_rated(MediaType::Movie, 1),
        tmdb.popular(MediaType::Tv, 1),
    );

    let (history, watchlist, favorites) = tokio::join!(
        api.history.mine(),
        api.watchlist.mine(),
        api.favorites.mine(),
    );

    let mut rails = vec![
        Rail::from_summaries("Em alta", trending, None),
        Rail::from_summaries("Filmes populares", popular_movies, Some(MediaType::Movie)),
        Rail::from_summaries("Filmes mais bem avaliados", top_movies, Some(MediaType::Movie)),
        Rail::from_summaries("Séries populares", popular_series, Some(MediaType::Tv)),
    ];

    let (continue_watching, my_list, my_favorites) = tokio::join!(
        media_rail(&tmdb, "Continue assistindo", history),
        media_rail(&tmdb, "Minha lista", watchlist),
        media_rail(&tmdb, "Favoritos", favorites),
    );
    append_personal_rails(&mut rails, [continue_watching, my_list, my_favorites]);

    let jar = sync_jar(jar, api.session(), state.config.production).await;
    (jar, Json(HomePage { rails }))
}

/// Append the viewer's rails, dropping the empty ones. Catalog rails are
/// kept as returned, even when empty.
fn append_personal_rails(rails: &mut Vec<Rail>, personal: [Rail; 3]) {
    for rail in personal {
        if !rail.items.is_empty() {
            rails.push(rail);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::views::MediaCard;

    fn rail(title: &str, cards: usize) -> Rail {
        let card = MediaCard {
            id: 1,
            media_type: Some(MediaType::Movie),
            title: "Title".to_string(),
            overview: None,
            poster_path: None,
            backdrop_path: None,
            vote_average: 7.0,
        };
        Rail {
            title: title.to_string(),
            items: vec![card; cards],
        }
    }

    #[test]
    fn only_empty_personal_rails_are_dropped() {
        // An empty catalog rail stays on the page
        let mut rails = vec![rail("Em alta", 3), rail("Filmes populares", 0)];

        append_personal_rails(
            &mut rails,
            [rail("Continue assistindo", 0), rail("Minha lista", 2), rail("Favoritos", 0)],
        );

        let titles: Vec<&str> = rails.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Em alta", "Filmes populares", "Minha lista"]);
    }
}
