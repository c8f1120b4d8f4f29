//! Per-record HTML fragments.
//!
//! Each generator fills one component with the fields of one record. None of
//! them holds state between calls; the component is re-read every time.

use labsite_data::{NewsItem, Person, ProfileLinks, Robot, SiteConfig};

use crate::builder::BuildError;
use crate::components::{Component, ComponentStore, Template};
use crate::location::PageLocation;
use crate::placeholders::{replace_placeholders, Placeholders};

/// Joins navigation anchors.
pub const NAV_SEPARATOR: &str = "\n    ";

/// Joins profile link anchors.
pub const PROFILE_LINK_SEPARATOR: &str = "\n                &nbsp\n                ";

/// Fragment generators bound to one component store and site config.
#[derive(Debug, Clone, Copy)]
pub struct Fragments<'a> {
    store: &'a ComponentStore,
    site: &'a SiteConfig,
}

impl<'a> Fragments<'a> {
    pub fn new(store: &'a ComponentStore, site: &'a SiteConfig) -> Self {
        Self { store, site }
    }

    /// Navigation anchors, one per entry, in configured order.
    pub fn navigation(&self, location: PageLocation) -> String {
        self.site
            .navigation
            .iter()
            .map(|item| {
                format!(
                    r#"<a href="{}" style="font-size: 23px; color:black">{}</a>"#,
                    location.nav_href(&item.href),
                    item.label
                )
            })
            .collect::<Vec<_>>()
            .join(NAV_SEPARATOR)
    }

    pub fn header(&self, location: PageLocation) -> Result<String, BuildError> {
        let template = self.store.component(Component::Header)?;

        Ok(replace_placeholders(
            &template,
            &Placeholders::new()
                .with("HOME_LINK", location.home_link())
                .with("LOGO_PATH", location.asset(&self.site.site.logo))
                .with("NAVIGATION_LINKS", self.navigation(location))
                .with("GITHUB_LINK", self.site.site.github.as_str()),
        ))
    }

    /// The footer has no placeholders and is returned as-is.
    pub fn footer(&self) -> Result<String, BuildError> {
        self.store.component(Component::Footer)
    }

    /// Profile block for a lab member.
    ///
    /// The affiliation line is shown only when `include_affiliation` is set
    /// and the person has one.
    pub fn person_profile(
        &self,
        person: &Person,
        include_affiliation: bool,
        location: PageLocation,
    ) -> Result<String, BuildError> {
        let template = self.store.component(Component::PersonProfile)?;

        let affiliation = person
            .affiliation()
            .filter(|_| include_affiliation)
            .map(|a| format!("<br>{}", a));

        Ok(replace_placeholders(
            &template,
            &Placeholders::new()
                .with("IMAGE_PATH", location.asset(&person.image))
                .with_optional("IMAGE_STYLE", person.image_style.as_deref())
                .with("NAME", person.name.as_str())
                .with("TITLE", person.title.as_str())
                .with_optional("AFFILIATION", affiliation)
                .with("PROFILE_LINKS", profile_links(&person.links)),
        ))
    }

    pub fn robot_profile(&self, robot: &Robot, location: PageLocation) -> Result<String, BuildError> {
        let template = self.store.component(Component::RobotProfile)?;

        Ok(replace_placeholders(
            &template,
            &Placeholders::new()
                .with("IMAGE_PATH", location.asset(&robot.image))
                .with("NAME", robot.name.as_str())
                .with("MANUFACTURER", robot.manufacturer.as_str()),
        ))
    }

    pub fn news_item(&self, item: &NewsItem, location: PageLocation) -> Result<String, BuildError> {
        let template = self.store.component(Component::NewsItem)?;

        Ok(replace_placeholders(
            &template,
            &Placeholders::new()
                .with("IMAGE_PATH", location.asset(&item.image))
                .with("TITLE", item.title.as_str())
                .with("DATE", item.date.as_str())
                .with("DESCRIPTION", item.description.as_str()),
        ))
    }

    pub fn section_header(&self, title: &str) -> Result<String, BuildError> {
        let template = self.store.component(Component::SectionHeader)?;

        Ok(replace_placeholders(
            &template,
            &Placeholders::new().with("SECTION_TITLE", title),
        ))
    }

    /// Wrap main content in the base template with header and footer.
    pub fn base_page(
        &self,
        page_title: &str,
        author: &str,
        main_content: &str,
        location: PageLocation,
    ) -> Result<String, BuildError> {
        let template = self.store.template(Template::Base)?;

        Ok(replace_placeholders(
            &template,
            &Placeholders::new()
                .with("PAGE_TITLE", page_title)
                .with("AUTHOR", author)
                .with("STYLESHEET_PATH", location.stylesheet())
                .with("FAVICON_PATH", location.asset(&self.site.site.favicon))
                .with("HEADER", self.header(location)?)
                .with("MAIN_CONTENT", main_content)
                .with("FOOTER", self.footer()?),
        ))
    }
}

/// Icon anchors for a profile, always in homepage, scholar, linkedin, email
/// order. Missing links are skipped without leaving a separator behind.
pub fn profile_links(links: &ProfileLinks) -> String {
    let mut anchors = Vec::with_capacity(4);

    if let Some(url) = links.homepage() {
        anchors.push(format!(
            r#"<a class="button-profile" href="{}"><i class="fa fa-home" aria-hidden="true"></i></a>"#,
            url
        ));
    }
    if let Some(url) = links.scholar() {
        anchors.push(format!(
            r#"<a class="button-profile" href="{}"><i class="fa fa-graduation-cap" aria-hidden="true"></i></a>"#,
            url
        ));
    }
    if let Some(url) = links.linkedin() {
        anchors.push(format!(
            r#"<a class="button-profile" href="{}"><i class="fa fa-linkedin"></i></a>"#,
            url
        ));
    }
    if let Some(email) = links.email() {
        anchors.push(format!(
            r#"<a class="button-profile" href="mailto:{}"><i class="fa fa-envelope"></i></a>"#,
            email
        ));
    }

    anchors.join(PROFILE_LINK_SEPARATOR)
}
