//! Extraction of structured records from the comics site's markup.
//!
//! The site has no API; every field comes from a fixed structural
//! position in its HTML. Each selector below is a literal contract with
//! the site's current layout, and this table is the only place to touch
//! when the layout shifts. Extraction never fails on missing nodes:
//! absent fields degrade to empty strings or lists, matching the
//! fail-soft contract of the HTTP facade. Only the suggestion JSON can
//! be genuinely malformed, so that decoder alone returns a `Result`.

use crate::error::ExtractError;
use crate::models::{
    Author, Category, Chapter, ComicDetail, ComicPage, ComicSearchResult, HotComic,
};
use scraper::{Html, Selector};
use serde::Deserialize;
use std::sync::LazyLock;

/// Selectors for the home page's update schedule.
struct HotSelectors {
    item: Selector,
    name: Selector,
    link: Selector,
    image: Selector,
}

static HOT: LazyLock<HotSelectors> = LazyLock::new(|| HotSelectors {
    item: Selector::parse("#schedule li").unwrap(),
    name: Selector::parse(".schedule-name").unwrap(),
    link: Selector::parse(".schedule-name a").unwrap(),
    image: Selector::parse("img").unwrap(),
});

/// Selectors for the comic detail page. The `dd:nth-child(n)` positions
/// index into the site's unlabeled definition list.
struct DetailSelectors {
    title: Selector,
    cover: Selector,
    comic_type: Selector,
    status: Selector,
    other_name: Selector,
    authors: Selector,
    date_release: Selector,
    categories: Selector,
    views: Selector,
    description: Selector,
    chapter_item: Selector,
    chapter_link: Selector,
    chapter_date: Selector,
    anchor: Selector,
}

static DETAIL: LazyLock<DetailSelectors> = LazyLock::new(|| DetailSelectors {
    title: Selector::parse(
        ".container > div:nth-child(1) > div:nth-child(1) > div:nth-child(1) > h2:nth-child(1)",
    )
    .unwrap(),
    cover: Selector::parse(".img-responsive").unwrap(),
    comic_type: Selector::parse(".dl-horizontal > dd:nth-child(2)").unwrap(),
    status: Selector::parse(".dl-horizontal > dd:nth-child(4)").unwrap(),
    other_name: Selector::parse(".dl-horizontal > dd:nth-child(6)").unwrap(),
    authors: Selector::parse(".dl-horizontal > dd:nth-child(8)").unwrap(),
    date_release: Selector::parse(".dl-horizontal > dd:nth-child(10)").unwrap(),
    categories: Selector::parse(".dl-horizontal > dd:nth-child(12)").unwrap(),
    views: Selector::parse(".dl-horizontal > dd:nth-child(17)").unwrap(),
    description: Selector::parse(".manga > p:nth-child(2)").unwrap(),
    chapter_item: Selector::parse(".chapters li").unwrap(),
    chapter_link: Selector::parse("h5:nth-child(1) > a:nth-child(1)").unwrap(),
    chapter_date: Selector::parse("div:nth-child(2) > div:nth-child(1)").unwrap(),
    anchor: Selector::parse("a").unwrap(),
});

/// Selector for the chapter reader's image container.
static PAGE_IMAGES: LazyLock<Selector> = LazyLock::new(|| Selector::parse("#all img").unwrap());

/// Extracts the home page's schedule list.
///
/// Entries with no anchor keep an empty `url_raw` and map to the bare
/// `/comic/` route; a missing cover image is an empty string, not an error.
pub fn hot_comics(html: &str) -> Vec<HotComic> {
    let document = Html::parse_document(html);
    let mut comics = Vec::new();

    for item in document.select(&HOT.item) {
        let title = item
            .select(&HOT.name)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let url_raw = item
            .select(&HOT.link)
            .next()
            .and_then(|a| a.value().attr("href"))
            .unwrap_or("")
            .to_string();
        let comic_id = last_path_segment(&url_raw);
        let image = item
            .select(&HOT.image)
            .next()
            .and_then(|img| img.value().attr("src"))
            .unwrap_or("")
            .to_string();

        comics.push(HotComic {
            title,
            url: format!("/comic/{}", comic_id),
            url_raw,
            image,
        });
    }

    comics
}

/// Extracts a comic's metadata and chapter list from its detail page.
///
/// `slug` is the identifier the caller requested the page with; chapter
/// routes are composed from it rather than from anything scraped.
pub fn comic_detail(html: &str, slug: &str) -> ComicDetail {
    let document = Html::parse_document(html);
    let sel = &*DETAIL;

    let title = text_of(&document, &sel.title);

    // Covers come protocol-relative; force https.
    let cover_src = document
        .select(&sel.cover)
        .next()
        .and_then(|img| img.value().attr("src"))
        .map(str::trim)
        .unwrap_or("");
    let image = format!("https:{}", cover_src);

    let authors = document
        .select(&sel.authors)
        .flat_map(|dd| dd.select(&sel.anchor))
        .map(|a| Author {
            name: a.text().collect::<String>(),
        })
        .collect();

    let categories = document
        .select(&sel.categories)
        .flat_map(|dd| dd.select(&sel.anchor))
        .map(|a| Category {
            category_name: a.text().collect::<String>(),
        })
        .collect();

    // Date text passes through untrimmed.
    let date_release = document
        .select(&sel.date_release)
        .next()
        .map(|e| e.text().collect::<String>())
        .unwrap_or_default();

    let mut chapters = Vec::new();
    for item in document.select(&sel.chapter_item) {
        let link = item.select(&sel.chapter_link).next();
        let title = link
            .map(|a| a.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let url_raw = link
            .and_then(|a| a.value().attr("href"))
            .unwrap_or("")
            .to_string();
        let date = item
            .select(&sel.chapter_date)
            .next()
            .map(|e| e.text().collect::<String>().trim().to_string())
            .unwrap_or_default();
        let chapter_number = last_path_segment(&url_raw);

        chapters.push(Chapter {
            title,
            url: format!("/comic/{}/{}", slug, chapter_number),
            url_raw,
            date,
        });
    }

    ComicDetail {
        title,
        image,
        comic_type: text_of(&document, &sel.comic_type),
        status: text_of(&document, &sel.status),
        other_name: text_of(&document, &sel.other_name),
        authors,
        date_release,
        categories,
        views: text_of(&document, &sel.views),
        description: text_of(&document, &sel.description),
        chapters,
    }
}

/// Extracts the reader's page images in reading order.
///
/// The reader lazy-loads, so the real URL lives in `data-src`; images
/// whose attribute is empty or whitespace are placeholders and are skipped.
pub fn chapter_pages(html: &str) -> Vec<ComicPage> {
    let document = Html::parse_document(html);
    let mut pages = Vec::new();

    for img in document.select(&PAGE_IMAGES) {
        if let Some(src) = img.value().attr("data-src") {
            let src = src.trim();
            if !src.is_empty() {
                pages.push(ComicPage {
                    image: src.to_string(),
                });
            }
        }
    }

    pages
}

#[derive(Deserialize)]
struct SuggestionPayload {
    #[serde(default)]
    suggestions: Option<SuggestionList>,
}

/// The endpoint serves `"suggestions": ""` instead of an empty array
/// when there are no matches.
#[derive(Deserialize)]
#[serde(untagged)]
enum SuggestionList {
    Entries(Vec<Suggestion>),
    Empty(String),
}

#[derive(Deserialize)]
struct Suggestion {
    value: String,
    data: String,
}

/// Decodes the suggestion endpoint's JSON into search results.
///
/// An empty-string or absent `suggestions` field means zero matches;
/// anything that is not the documented schema is an [`ExtractError`].
pub fn search_suggestions(json: &str) -> Result<Vec<ComicSearchResult>, ExtractError> {
    let payload: SuggestionPayload = serde_json::from_str(json)?;

    let entries = match payload.suggestions {
        Some(SuggestionList::Entries(entries)) => entries,
        Some(SuggestionList::Empty(_)) | None => Vec::new(),
    };

    Ok(entries
        .into_iter()
        .map(|s| ComicSearchResult {
            title: s.value,
            url: format!("/comic/{}", s.data),
            data: s.data,
        })
        .collect())
}

fn text_of(document: &Html, selector: &Selector) -> String {
    document
        .select(selector)
        .next()
        .map(|e| e.text().collect::<String>().trim().to_string())
        .unwrap_or_default()
}

fn last_path_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;

    const SCHEDULE_HTML: &str = r#"
        <html><body>
        <ul id="schedule">
            <li>
                <img src="https://cdn.example.net/covers/spawn.jpg">
                <div class="schedule-name"><a href="https://readcomicsonline.ru/comic/spawn">Spawn</a></div>
            </li>
            <li>
                <div class="schedule-name"><a href="https://readcomicsonline.ru/comic/invincible-2022">Invincible (2022)</a></div>
            </li>
            <li>
                <div class="schedule-name">Unlinked Teaser</div>
            </li>
        </ul>
        </body></html>"#;

    #[test]
    fn hot_comics_reads_schedule_entries() {
        let comics = hot_comics(SCHEDULE_HTML);
        assert_eq!(comics.len(), 3);

        assert_eq!(comics[0].title, "Spawn");
        assert_eq!(comics[0].url_raw, "https://readcomicsonline.ru/comic/spawn");
        assert_eq!(comics[0].url, "/comic/spawn");
        assert_eq!(comics[0].image, "https://cdn.example.net/covers/spawn.jpg");

        // No <img> in the item: cover is empty, not an error.
        assert_eq!(comics[1].title, "Invincible (2022)");
        assert_eq!(comics[1].url, "/comic/invincible-2022");
        assert_eq!(comics[1].image, "");
    }

    #[test]
    fn hot_comics_without_anchor_keeps_empty_url_raw() {
        let comics = hot_comics(SCHEDULE_HTML);
        assert_eq!(comics[2].title, "Unlinked Teaser");
        assert_eq!(comics[2].url_raw, "");
        assert_eq!(comics[2].url, "/comic/");
    }

    #[test]
    fn hot_comics_tolerates_markup_without_schedule() {
        assert!(hot_comics("").is_empty());
        assert!(hot_comics("<html><body><p>maintenance</p></body></html>").is_empty());
        assert!(hot_comics("<<<not html>>>").is_empty());
    }

    const DETAIL_HTML: &str = r#"
        <html><body>
        <div class="container">
            <div>
                <div>
                    <div>
                        <h2>  Spawn  </h2>
                    </div>
                </div>
            </div>
        </div>
        <img class="img-responsive" src=" //cdn.example.net/covers/spawn-large.jpg ">
        <dl class="dl-horizontal">
            <dt>Type</dt><dd> Comic </dd>
            <dt>Status</dt><dd>Ongoing</dd>
            <dt>Other names</dt><dd>Al Simmons</dd>
            <dt>Author(s)</dt><dd><a href="/author/mcfarlane">Todd McFarlane</a><a href="/author/capullo">Greg Capullo</a></dd>
            <dt>Date of release</dt><dd> 1992 </dd>
            <dt>Categories</dt><dd><a href="/cat/action">Action</a><a href="/cat/horror">Horror</a></dd>
            <dt>Tags</dt><dd>antihero</dd>
            <dt>Rating</dt><dd>4.5</dd>
            <dd>  1234567 </dd>
        </dl>
        <div class="manga">
            <h5>Summary</h5>
            <p>  A resurrected soldier fights for his soul.  </p>
        </div>
        <ul class="chapters">
            <li>
                <h5><a href="https://readcomicsonline.ru/comic/spawn/301">Spawn #301</a></h5>
                <div><div>25 Aug. 2019</div></div>
            </li>
            <li>
                <h5><a href="https://readcomicsonline.ru/comic/spawn/300">Spawn #300</a></h5>
                <div><div>28 Jul. 2019</div></div>
            </li>
        </ul>
        </body></html>"#;

    #[test]
    fn comic_detail_maps_positional_fields() {
        let detail = comic_detail(DETAIL_HTML, "spawn");

        assert_eq!(detail.title, "Spawn");
        assert_eq!(detail.image, "https://cdn.example.net/covers/spawn-large.jpg");
        assert_eq!(detail.comic_type, "Comic");
        assert_eq!(detail.status, "Ongoing");
        assert_eq!(detail.other_name, "Al Simmons");
        assert_eq!(detail.date_release, " 1992 ");
        assert_eq!(detail.views, "1234567");
        assert_eq!(detail.description, "A resurrected soldier fights for his soul.");
    }

    #[test]
    fn comic_detail_collects_one_record_per_anchor() {
        let detail = comic_detail(DETAIL_HTML, "spawn");

        let names: Vec<&str> = detail.authors.iter().map(|a| a.name.as_str()).collect();
        assert_eq!(names, ["Todd McFarlane", "Greg Capullo"]);

        let cats: Vec<&str> = detail
            .categories
            .iter()
            .map(|c| c.category_name.as_str())
            .collect();
        assert_eq!(cats, ["Action", "Horror"]);
    }

    #[test]
    fn comic_detail_chapters_keep_dom_order_and_derive_routes() {
        let detail = comic_detail(DETAIL_HTML, "spawn");
        assert_eq!(detail.chapters.len(), 2);

        assert_eq!(detail.chapters[0].title, "Spawn #301");
        assert_eq!(detail.chapters[0].url_raw, "https://readcomicsonline.ru/comic/spawn/301");
        assert_eq!(detail.chapters[0].url, "/comic/spawn/301");
        assert_eq!(detail.chapters[0].date, "25 Aug. 2019");

        assert_eq!(detail.chapters[1].url, "/comic/spawn/300");
    }

    #[test]
    fn comic_detail_of_unrelated_markup_is_all_empty() {
        let detail = comic_detail("<html><body></body></html>", "ghost");
        assert_eq!(detail.title, "");
        // The https fix-up applies even with no cover present.
        assert_eq!(detail.image, "https:");
        assert!(detail.authors.is_empty());
        assert!(detail.categories.is_empty());
        assert!(detail.chapters.is_empty());
    }

    const READER_HTML: &str = r#"
        <div id="all">
            <img data-src="  https://cdn.example.net/spawn/300/01.jpg ">
            <img data-src="https://cdn.example.net/spawn/300/02.jpg">
            <img data-src="   ">
            <img src="https://cdn.example.net/spinner.gif">
        </div>"#;

    #[test]
    fn chapter_pages_trims_and_skips_placeholders() {
        let pages = chapter_pages(READER_HTML);
        let urls: Vec<&str> = pages.iter().map(|p| p.image.as_str()).collect();
        assert_eq!(
            urls,
            [
                "https://cdn.example.net/spawn/300/01.jpg",
                "https://cdn.example.net/spawn/300/02.jpg",
            ]
        );
    }

    #[test]
    fn chapter_pages_of_empty_markup_is_empty() {
        assert!(chapter_pages("").is_empty());
        assert!(chapter_pages("<div id=\"all\"></div>").is_empty());
    }

    #[test]
    fn suggestions_decode_entries() {
        let json = r#"{"suggestions":[
            {"value":"Doomsday Clock (2017)","data":"doomsday-clock-2017"},
            {"value":"Spawn","data":"spawn"}
        ]}"#;
        let results = search_suggestions(json).unwrap();
        assert_eq!(results.len(), 2);
        assert_eq!(results[0].title, "Doomsday Clock (2017)");
        assert_eq!(results[0].url, "/comic/doomsday-clock-2017");
        assert_eq!(results[0].data, "doomsday-clock-2017");
    }

    #[test]
    fn suggestions_empty_string_means_no_matches() {
        assert!(search_suggestions(r#"{"suggestions":""}"#).unwrap().is_empty());
        assert!(search_suggestions("{}").unwrap().is_empty());
    }

    #[test]
    fn suggestions_reject_non_json_bodies() {
        assert!(search_suggestions("<html>blocked</html>").is_err());
        assert!(search_suggestions("").is_err());
    }

    #[test]
    fn last_segment_handles_edge_shapes() {
        assert_eq!(last_path_segment("https://x/comic/spawn"), "spawn");
        assert_eq!(last_path_segment("spawn"), "spawn");
        assert_eq!(last_path_segment("https://x/comic/spawn/"), "");
        assert_eq!(last_path_segment(""), "");
    }
}
