//! Whole-page assembly.
//!
//! Each assembler builds the main content for one page from section headers
//! and per-record fragments, then wraps it in the base template.

use labsite_data::{NewsItem, Person, SiteData};

use crate::builder::BuildError;
use crate::fragments::Fragments;
use crate::location::PageLocation;

const INDEX_AUTHOR: &str = "Ching-I Huang";
const PEOPLE_AUTHOR: &str = "Welly";
const NEWS_AUTHOR: &str = "Andrea Bajcsy";
const RESEARCH_AUTHOR: &str = "Andrea Bajcsy";

const ROBOTS_OPEN: &str = r#"
      <table style="width:100%;border:0px;border-spacing:0px;border-collapse:separate;margin-right:auto;margin-left:auto;">
        <tbody>
          <table style="width:100%;border:0px;border-spacing:0px;border-collapse:separate;margin-right:auto;margin-left:auto;">
            <tbody>"#;

const ROBOTS_CLOSE: &str = r#"
            </tbody>
          </table>
        </tbody>
      </table>"#;

/// A generated page and where it goes.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedPage {
    /// File name, e.g. `people.html`
    pub file_name: &'static str,

    pub location: PageLocation,

    /// Complete HTML document
    pub html: String,
}

/// Assembles every page of the site from loaded data.
pub struct PageAssembler<'a> {
    fragments: Fragments<'a>,
    data: &'a SiteData,
}

impl<'a> PageAssembler<'a> {
    pub fn new(fragments: Fragments<'a>, data: &'a SiteData) -> Self {
        Self { fragments, data }
    }

    /// Render all pages: root pages first, then sub-pages.
    pub fn render_all(&self) -> Result<Vec<RenderedPage>, BuildError> {
        Ok(vec![
            RenderedPage {
                file_name: "index.html",
                location: PageLocation::Root,
                html: self.index_page()?,
            },
            RenderedPage {
                file_name: "people.html",
                location: PageLocation::Subpage,
                html: self.people_page()?,
            },
            RenderedPage {
                file_name: "news.html",
                location: PageLocation::Subpage,
                html: self.news_page()?,
            },
            RenderedPage {
                file_name: "research.html",
                location: PageLocation::Subpage,
                html: self.research_page()?,
            },
        ])
    }

    /// Home page: banner, lab description and location.
    pub fn index_page(&self) -> Result<String, BuildError> {
        let lab = &self.data.site.lab;
        let content = format!(
            r#"
      <table width="100%" align="center" border="0" cellspacing="0" cellpadding="20">
        <tbody>
          <tr>
            <td>
              <img src="assets/images/general/application_domains.png" width="100%">
              <p>{description}</p>
              <p>
                <b>Location:</b> <a href="{map_link}">{address}</a><br>
                <b>Lab: {lab_room}</b><br>
                <b>Office: {office}</b><br>
              </p>
            </td>
          </tr>
        </tbody>
      </table>"#,
            description = lab.description,
            map_link = lab.location.map_link,
            address = lab.location.address,
            lab_room = lab.location.lab,
            office = lab.location.office,
        );

        self.fragments.base_page(
            &self.data.site.site.title,
            INDEX_AUTHOR,
            &content,
            PageLocation::Root,
        )
    }

    /// People page: one section per member category, then the robots.
    pub fn people_page(&self) -> Result<String, BuildError> {
        let location = PageLocation::Subpage;
        let people = &self.data.people;
        let mut content = String::new();

        let sections: [(&str, &[Person], bool); 4] = [
            ("Director", people.director.as_slice(), true),
            ("PhD Students", people.phd_students.as_slice(), false),
            ("Masters Students", people.masters_students.as_slice(), false),
            ("Collaborators & Visiting Students", people.collaborators.as_slice(), false),
        ];

        for (title, members, include_affiliation) in sections {
            content.push_str(&self.fragments.section_header(title)?);
            for person in members {
                content.push_str(&self.fragments.person_profile(
                    person,
                    include_affiliation,
                    location,
                )?);
            }
        }

        content.push_str(&self.fragments.section_header("Robots")?);
        content.push_str(ROBOTS_OPEN);
        for robot in &people.robots {
            content.push_str(&self.fragments.robot_profile(robot, location)?);
        }
        content.push_str(ROBOTS_CLOSE);

        self.fragments
            .base_page("People", PEOPLE_AUTHOR, &content, location)
    }

    /// News page: awards, events and research news, in that order.
    pub fn news_page(&self) -> Result<String, BuildError> {
        let location = PageLocation::Subpage;
        let news = &self.data.news;
        let mut content = String::new();

        let sections: [(&str, &[NewsItem]); 3] = [
            ("Award", news.awards.as_slice()),
            ("Event", news.events.as_slice()),
            ("Research", news.research.as_slice()),
        ];

        for (title, items) in sections {
            content.push_str(&self.fragments.section_header(title)?);
            for item in items {
                content.push_str(&self.fragments.news_item(item, location)?);
            }
        }

        self.fragments
            .base_page("Publications", NEWS_AUTHOR, &content, location)
    }

    pub fn research_page(&self) -> Result<String, BuildError> {
        let content = format!(
            r#"
      <table width="100%" align="center" border="0" cellspacing="0" cellpadding="20">
        <tbody>
          <tr>
            <td>
              <p>{}</p>
            </td>
          </tr>
        </tbody>
      </table>"#,
            self.data.site.lab.research_description
        );

        self.fragments
            .base_page("Research", RESEARCH_AUTHOR, &content, PageLocation::Subpage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragments::tests::{fixture_store, site};
    use labsite_data::{News, People};
    use pretty_assertions::assert_eq;

    fn data(people: &str, news: &str) -> SiteData {
        SiteData {
            site: site(),
            people: serde_json::from_str::<People>(people).unwrap(),
            news: serde_json::from_str::<News>(news).unwrap(),
        }
    }

    const PEOPLE: &str = r#"{
        "director": [{ "name": "C. Huang", "title": "Professor", "affiliation": "NTU", "image": "img/c.png" }],
        "phdStudents": [
            { "name": "A. Lee", "title": "PhD Student", "affiliation": "MIT", "image": "img/a.png" },
            { "name": "B. Wu", "title": "PhD Student", "image": "img/b.png" }
        ],
        "mastersStudents": [],
        "collaborators": [],
        "robots": [{ "name": "Spot", "manufacturer": "Boston Dynamics", "image": "img/spot.png" }]
    }"#;

    const NO_NEWS: &str = r#"{ "awards": [], "events": [], "research": [] }"#;

    #[test]
    fn people_sections_follow_category_order() {
        let (_temp, store) = fixture_store();
        let data = data(PEOPLE, NO_NEWS);
        let assembler = PageAssembler::new(Fragments::new(&store, &data.site), &data);

        let html = assembler.people_page().unwrap();

        let headers = [
            "<h2>Director</h2>",
            "<h2>PhD Students</h2>",
            "<h2>Masters Students</h2>",
            "<h2>Collaborators & Visiting Students</h2>",
            "<h2>Robots</h2>",
        ];
        let positions: Vec<usize> = headers.iter().map(|h| html.find(h).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        assert!(html.find("A. Lee").unwrap() < html.find("B. Wu").unwrap());
        assert!(html.contains("Professor<br>NTU"));
        assert!(!html.contains("<br>MIT"));
        assert!(html.contains("[../img/spot.png|Spot|Boston Dynamics]"));
        assert!(html.starts_with("People|Welly|"));
    }

    #[test]
    fn empty_categories_keep_their_headers() {
        let (_temp, store) = fixture_store();
        let data = data(
            PEOPLE,
            r#"{
                "awards": [],
                "events": [{ "title": "Open House", "date": "May", "description": "d", "image": "img/o.png" }],
                "research": []
            }"#,
        );
        let assembler = PageAssembler::new(Fragments::new(&store, &data.site), &data);

        let html = assembler.news_page().unwrap();

        assert!(html.contains("<h2>Award</h2><h2>Event</h2>[../img/o.png|Open House|May|d]<h2>Research</h2>"));
        assert!(html.starts_with("Publications|Andrea Bajcsy|"));
    }

    #[test]
    fn index_page_is_rooted() {
        let (_temp, store) = fixture_store();
        let data = data(PEOPLE, NO_NEWS);
        let assembler = PageAssembler::new(Fragments::new(&store, &data.site), &data);

        let html = assembler.index_page().unwrap();

        assert!(html.starts_with(
            "HRC Lab|Ching-I Huang|styles/stylesheet.css|assets/images/favicon.ico\n"
        ));
        assert!(html.contains(r#"<a href="https://maps.example.com/1">1 Main St</a>"#));
        assert!(html.contains("<b>Lab: Room 101</b>"));
        assert!(html.contains("<b>Office: Room 202</b>"));
        assert!(!html.contains("../"));
    }

    #[test]
    fn research_page_shows_description() {
        let (_temp, store) = fixture_store();
        let data = data(PEOPLE, NO_NEWS);
        let assembler = PageAssembler::new(Fragments::new(&store, &data.site), &data);

        let html = assembler.research_page().unwrap();

        assert!(html.starts_with("Research|Andrea Bajcsy|../styles/stylesheet.css|"));
        assert!(html.contains("<p>Humans and robots.</p>"));
    }

    #[test]
    fn renders_pages_in_write_order() {
        let (_temp, store) = fixture_store();
        let data = data(PEOPLE, NO_NEWS);
        let assembler = PageAssembler::new(Fragments::new(&store, &data.site), &data);

        let pages = assembler.render_all().unwrap();

        let names: Vec<_> = pages.iter().map(|p| (p.file_name, p.location)).collect();
        assert_eq!(
            names,
            vec![
                ("index.html", PageLocation::Root),
                ("people.html", PageLocation::Subpage),
                ("news.html", PageLocation::Subpage),
                ("research.html", PageLocation::Subpage),
            ]
        );
    }
}
