//! The endpoint list shipped with the console.
//!
//! Aggregated from two source repositories; see [`crate::credits`].

use crate::endpoint::{Endpoint, HttpMethod, Parameter};

const WATARU: &str = "wataru-api";
const SHIN: &str = "Shin-API-UI-V2";
const VERSION: &str = "1.0.0";

fn param(name: &str, param_type: &str, required: bool, description: &str) -> Parameter {
    Parameter {
        name: name.to_owned(),
        param_type: param_type.to_owned(),
        required,
        description: description.to_owned(),
    }
}

fn url_param(description: &str) -> Vec<Parameter> {
    vec![param("url", "string", true, description)]
}

fn query_param() -> Vec<Parameter> {
    vec![param("q", "string", true, "Search query")]
}

fn id_param(description: &str) -> Vec<Parameter> {
    vec![param("id", "number", true, description)]
}

fn get(
    id: &str,
    name: &str,
    path: &str,
    description: &str,
    parameters: Vec<Parameter>,
    category: &str,
    author: &str,
) -> Endpoint {
    Endpoint {
        id: id.to_owned(),
        name: name.to_owned(),
        method: HttpMethod::Get,
        path: path.to_owned(),
        description: description.to_owned(),
        parameters,
        category: category.to_owned(),
        version: VERSION.to_owned(),
        author: author.to_owned(),
    }
}

pub(crate) fn builtin_endpoints() -> Vec<Endpoint> {
    vec![
        get(
            "bluearchive",
            "Blue Archive",
            "/api/bluearchive",
            "Get random Blue Archive character image",
            Vec::new(),
            "anime",
            WATARU,
        ),
        get(
            "deepseek",
            "DeepSeek AI",
            "/api/deepseek?text=",
            "AI chatbot powered by DeepSeek",
            vec![param("text", "string", true, "Your message to the AI")],
            "ai",
            WATARU,
        ),
        get(
            "mal-animeinfo",
            "MAL Anime Info",
            "/api/mal-animeinfo?id=",
            "Get detailed anime information from MyAnimeList",
            id_param("MyAnimeList anime ID"),
            "anime",
            WATARU,
        ),
        get(
            "mal-animesearch",
            "MAL Anime Search",
            "/api/mal-animesearch?q=",
            "Search for anime on MyAnimeList",
            query_param(),
            "anime",
            WATARU,
        ),
        get(
            "mal-charainfo",
            "MAL Character Info",
            "/api/mal-charainfo?id=",
            "Get detailed character information from MyAnimeList",
            id_param("MyAnimeList character ID"),
            "anime",
            WATARU,
        ),
        get(
            "mal-charasearch",
            "MAL Character Search",
            "/api/mal-charasearch?q=",
            "Search for characters on MyAnimeList",
            query_param(),
            "anime",
            WATARU,
        ),
        get(
            "mal-mangainfo",
            "MAL Manga Info",
            "/api/mal-mangainfo?id=",
            "Get detailed manga information from MyAnimeList",
            id_param("MyAnimeList manga ID"),
            "anime",
            WATARU,
        ),
        get(
            "mal-mangasearch",
            "MAL Manga Search",
            "/api/mal-mangasearch?q=",
            "Search for manga on MyAnimeList",
            query_param(),
            "anime",
            WATARU,
        ),
        get(
            "mal-seasonalanime",
            "MAL Seasonal Anime",
            "/api/mal-seasonalanime",
            "Get current seasonal anime from MyAnimeList",
            Vec::new(),
            "anime",
            WATARU,
        ),
        get(
            "mal-topanime",
            "MAL Top Anime",
            "/api/mal-topanime",
            "Get top anime from MyAnimeList",
            Vec::new(),
            "anime",
            WATARU,
        ),
        get(
            "spotifydl",
            "Spotify Downloader",
            "/api/spotifydl?url=",
            "Download Spotify tracks",
            url_param("Spotify track URL"),
            "downloader",
            WATARU,
        ),
        get(
            "spotifydl2",
            "Spotify Downloader V2",
            "/api/spotifydl2?url=",
            "Download Spotify tracks (Alternative method)",
            url_param("Spotify track URL"),
            "downloader",
            WATARU,
        ),
        get(
            "tikdl",
            "TikTok Downloader",
            "/api/tikdl?url=",
            "Download TikTok videos without watermark",
            url_param("TikTok video URL"),
            "downloader",
            WATARU,
        ),
        get(
            "unidl",
            "Universal Downloader",
            "/api/unidl?url=",
            "Universal video downloader for multiple platforms",
            url_param("Video URL from supported platforms"),
            "downloader",
            WATARU,
        ),
        get(
            "ytmp3dl",
            "YouTube MP3 Downloader",
            "/api/ytmp3dl?url=",
            "Download YouTube videos as MP3",
            url_param("YouTube video URL"),
            "downloader",
            WATARU,
        ),
        get(
            "ytsearch",
            "YouTube Search",
            "/api/ytsearch?q=",
            "Search for videos on YouTube",
            query_param(),
            "search",
            WATARU,
        ),
        get(
            "hello",
            "Hello World",
            "/api/hello?name=",
            "Greet someone by name",
            vec![param("name", "string", false, "Name to greet (defaults to World)")],
            "tools",
            WATARU,
        ),
        get(
            "reverse",
            "Reverse Text",
            "/api/reverse?text=",
            "Reverse a piece of text character by character",
            vec![param("text", "string", true, "Text to reverse")],
            "tools",
            WATARU,
        ),
        get(
            "cosplay",
            "Cosplay Images",
            "/api/cosplay",
            "Get random cosplay images",
            Vec::new(),
            "random",
            SHIN,
        ),
        get(
            "loli",
            "Loli Images",
            "/api/loli",
            "Get random anime loli images",
            Vec::new(),
            "random",
            SHIN,
        ),
        get(
            "lyrics",
            "Lyrics Search",
            "/api/lyrics?title=&artist=",
            "Search for song lyrics",
            vec![
                param("title", "string", true, "Song title"),
                param("artist", "string", false, "Artist name"),
            ],
            "search",
            SHIN,
        ),
    ]
}
