//! JSON view models rendered to the browser shell
//!
//! Handlers assemble these from facade reads; they carry only what the
//! pages display.

use serde::Serialize;

use client::models::{Comment, User};
use client::tmdb::{MediaDetails, MediaSummary, MediaType, ResolvedMedia};

/// One poster card in a rail or grid
#[derive(Debug, Clone, Serialize)]
pub struct MediaCard {
    /// Catalog identifier
    pub id: u64,
    /// Media kind, when known
    pub media_type: Option<MediaType>,
    /// Display title
    pub title: String,
    /// Synopsis
    pub overview: Option<String>,
    /// Poster image path
    pub poster_path: Option<String>,
    /// Backdrop image path
    pub backdrop_path: Option<String>,
    /// Average rating
    pub vote_average: f32,
}

impl MediaCard {
    /// Card from a catalog list entry, with a kind fallback for
    /// single-kind feeds that omit the tag
    pub fn from_summary(summary: MediaSummary, fallback: Option<MediaType>) -> Self {
        let media_type = summary.kind().or(fallback);
        let title = summary
            .title
            .or(summary.name)
            .unwrap_or_else(|| "Untitled".to_string());
        Self {
            id: summary.id,
            media_type,
            title,
            overview: summary.overview,
            poster_path: summary.poster_path,
            backdrop_path: summary.backdrop_path,
            vote_average: summary.vote_average,
        }
    }

    /// Card from a resolved detail record
    pub fn from_resolved(resolved: ResolvedMedia) -> Self {
        let title = resolved.details.display_title().to_string();
        Self {
            id: resolved.details.id,
            media_type: Some(resolved.media_type),
            title,
            overview: resolved.details.overview,
            poster_path: resolved.details.poster_path,
            backdrop_path: resolved.details.backdrop_path,
            vote_average: resolved.details.vote_average,
        }
    }
}

/// A titled row of cards
#[derive(Debug, Clone, Serialize)]
pub struct Rail {
    /// Row heading
    pub title: String,
    /// Cards in display order
    pub items: Vec<MediaCard>,
}

impl Rail {
    /// Build a rail from list entries of a known kind
    pub fn from_summaries(
        title: &str,
        summaries: Vec<MediaSummary>,
        fallback: Option<MediaType>,
    ) -> Self {
        Self {
            title: title.to_string(),
            items: summaries
                .into_iter()
                .map(|summary| MediaCard::from_summary(summary, fallback))
                .collect(),
        }
    }

    /// Build a rail from resolved detail records
    pub fn from_resolved(title: &str, resolved: Vec<ResolvedMedia>) -> Self {
        Self {
            title: title.to_string(),
            items: resolved.into_iter().map(MediaCard::from_resolved).collect(),
        }
    }
}

/// The home page view model
#[derive(Debug, Serialize)]
pub struct HomePage {
    /// Rails in display order
    pub rails: Vec<Rail>,
}

/// A per-kind catalog page (movies or series)
#[derive(Debug, Serialize)]
pub struct CatalogPage {
    /// The kind this page lists
    pub media_type: MediaType,
    /// Popular titles
    pub popular: Vec<MediaCard>,
    /// Top-rated titles
    pub top_rated: Vec<MediaCard>,
}

/// Search results page
#[derive(Debug, Serialize)]
pub struct SearchPage {
    /// The query as typed
    pub query: String,
    /// Matching cards
    pub results: Vec<MediaCard>,
}

/// One rendered comment
#[derive(Debug, Serialize)]
pub struct CommentView {
    /// Comment id
    pub id: String,
    /// Comment body
    pub content: String,
    /// Author id
    pub user_id: String,
    /// Author display name, when the author record resolved
    pub author_name: Option<String>,
    /// Creation timestamp
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// Whether the viewer may edit or delete it
    pub editable: bool,
}

impl CommentView {
    /// Render a comment for a given viewer
    pub fn new(comment: Comment, author_name: Option<String>, viewer_id: Option<&str>) -> Self {
        let editable = viewer_id == Some(comment.user_id.as_str());
        Self {
            id: comment.id,
            content: comment.content,
            user_id: comment.user_id,
            author_name,
            created_at: comment.created_at,
            editable,
        }
    }
}

/// Media detail page
#[derive(Debug, Serialize)]
pub struct MediaPage {
    /// Resolved kind
    pub media_type: MediaType,
    /// Full catalog record
    pub details: MediaDetails,
    /// Whether the title is in the viewer's favorites
    pub is_favorite: bool,
    /// Whether the title is in the viewer's watchlist
    pub in_watchlist: bool,
    /// Whether the title is in the viewer's history
    pub in_history: bool,
    /// Comments attached to the title, newest last
    pub comments: Vec<CommentView>,
}

/// One user in a grid, with the viewer's follow state
#[derive(Debug, Serialize)]
pub struct UserCard {
    /// The user record
    pub user: User,
    /// Whether the viewer follows this user
    pub following: bool,
}

/// The viewer's own profile page
#[derive(Debug, Serialize)]
pub struct ProfilePage {
    /// The viewer's user record
    pub user: User,
    /// Favorites, most recent first
    pub favorites: Rail,
    /// Watchlist, most recent first
    pub watchlist: Rail,
    /// Watch history, most recent first
    pub history: Rail,
    /// Number of users the viewer follows
    pub following_count: usize,
}

/// Another user's public page
#[derive(Debug, Serialize)]
pub struct UserPage {
    /// The user record
    pub user: User,
    /// Whether the viewer follows this user
    pub following: bool,
    /// Users this user follows
    pub friends: Vec<UserCard>,
}

/// Community page: every registered user
#[derive(Debug, Serialize)]
pub struct CommunityPage {
    /// All users, with follow state for the viewer
    pub users: Vec<UserCard>,
}

/// Result of a membership toggle
#[derive(Debug, Serialize)]
pub struct ActionResponse {
    /// Whether the backend accepted the change
    pub ok: bool,
    /// Membership state after the call settled
    pub active: bool,
    /// Transient notice to surface, if any
    pub notice: Option<String>,
}

/// The signed-in viewer, as the shell needs it
#[derive(Debug, Serialize)]
pub struct SessionView {
    /// The viewer's user record
    pub user: User,
}
