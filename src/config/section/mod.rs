//! Configuration section definitions.
//!
//! | Section        | Purpose                                         |
//! |----------------|-------------------------------------------------|
//! | `[site]`       | Site identity (title, author, url, timezone)    |
//! | `[content]`    | Input/output directory mapping                  |
//! | `[theme]`      | Template-set selection                          |
//! | `[feeds]`      | Syndication feed output paths                   |
//! | `[pagination]` | Listing page size and content ordering          |
//! | `[category]`   | Category derivation settings                    |
//! | `[menu]`       | Navigation entries and display flags            |
//! | `[social]`     | Footer link list                                |
//! | `[serve]`      | Preview server bind address/port                |

mod category;
mod content;
mod feeds;
mod link;
mod menu;
mod pagination;
mod serve;
mod site;
mod social;
mod theme;

pub use category::CategoryConfig;
pub use content::ContentConfig;
pub use feeds::{FeedTemplate, FeedsConfig};
pub use link::LinkEntry;
pub use menu::MenuConfig;
pub use pagination::{OrderBy, PaginationConfig};
pub use serve::ServeConfig;
pub use site::SiteSectionConfig;
pub use social::SocialConfig;
pub use theme::ThemeConfig;
