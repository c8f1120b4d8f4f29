//! Starter content for a new site.

use std::fs;
use std::path::{Path, PathBuf};

use labsite_data::loader::{NEWS_FILE, PEOPLE_FILE, SITE_FILE};

use crate::builder::{BuildError, COMPONENTS_DIR, DATA_DIR, TEMPLATES_DIR};
use crate::components::{Component, Template};

/// Files touched by [`scaffold`].
#[derive(Debug, Default)]
pub struct ScaffoldReport {
    pub created: Vec<PathBuf>,

    /// Existing files left untouched
    pub skipped: Vec<PathBuf>,
}

/// Write starter data, components and the base template under `src_dir`.
///
/// Existing files are kept unless `overwrite` is set.
pub fn scaffold(src_dir: &Path, overwrite: bool) -> Result<ScaffoldReport, BuildError> {
    let mut report = ScaffoldReport::default();

    let data_dir = src_dir.join(DATA_DIR);
    let components_dir = src_dir.join(COMPONENTS_DIR);
    let templates_dir = src_dir.join(TEMPLATES_DIR);

    let mut files: Vec<(PathBuf, &str)> = vec![
        (data_dir.join(SITE_FILE), DEFAULT_SITE),
        (data_dir.join(PEOPLE_FILE), DEFAULT_PEOPLE),
        (data_dir.join(NEWS_FILE), DEFAULT_NEWS),
        (templates_dir.join(Template::Base.file_name()), BASE_TEMPLATE),
    ];
    files.extend(
        Component::ALL
            .iter()
            .map(|c| (components_dir.join(c.file_name()), component_source(*c))),
    );

    for (path, content) in files {
        if path.exists() && !overwrite {
            report.skipped.push(path);
            continue;
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|source| BuildError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }
        fs::write(&path, content).map_err(|source| BuildError::Write {
            path: path.clone(),
            source,
        })?;
        report.created.push(path);
    }

    Ok(report)
}

/// Default markup for a component.
pub fn component_source(component: Component) -> &'static str {
    match component {
        Component::Header => HEADER,
        Component::Footer => FOOTER,
        Component::PersonProfile => PERSON_PROFILE,
        Component::RobotProfile => ROBOT_PROFILE,
        Component::NewsItem => NEWS_ITEM,
        Component::SectionHeader => SECTION_HEADER,
    }
}

const BASE_TEMPLATE: &str = r##"<!DOCTYPE html>
<html lang="en">
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1">
  <meta name="author" content="{{AUTHOR}}">
  <title>{{PAGE_TITLE}}</title>
  <link rel="stylesheet" type="text/css" href="{{STYLESHEET_PATH}}">
  <link rel="icon" type="image/png" href="{{FAVICON_PATH}}">
  <link rel="stylesheet" href="https://cdnjs.cloudflare.com/ajax/libs/font-awesome/4.7.0/css/font-awesome.min.css">
</head>
<body>
  <table style="width:100%;max-width:900px;border:0px;border-spacing:0px;border-collapse:separate;margin-right:auto;margin-left:auto;">
    <tbody>
      <tr>
        <td>
{{HEADER}}
{{MAIN_CONTENT}}
{{FOOTER}}
        </td>
      </tr>
    </tbody>
  </table>
</body>
</html>
"##;

const HEADER: &str = r##"<table style="width:100%;border:0px;border-spacing:0px;border-collapse:separate;margin-right:auto;margin-left:auto;">
  <tbody>
    <tr>
      <td style="padding:2.5%;width:40%;vertical-align:middle">
        <a href="{{HOME_LINK}}"><img src="{{LOGO_PATH}}" alt="Lab logo" width="100%"></a>
      </td>
      <td style="padding:2.5%;width:60%;vertical-align:middle;text-align:right">
    {{NAVIGATION_LINKS}}
        <a href="{{GITHUB_LINK}}" style="font-size: 23px; color:black"><i class="fa fa-github"></i></a>
      </td>
    </tr>
  </tbody>
</table>
"##;

const FOOTER: &str = r##"<table style="width:100%;border:0px;border-spacing:0px;border-collapse:separate;margin-right:auto;margin-left:auto;">
  <tbody>
    <tr>
      <td style="padding:0px">
        <br>
        <p style="text-align:center;font-size:small;">
          Website template adapted from <a href="https://jonbarron.info/">Jon Barron</a>.
        </p>
      </td>
    </tr>
  </tbody>
</table>
"##;

const SECTION_HEADER: &str = r##"
      <table style="width:100%;border:0px;border-spacing:0px;border-collapse:separate;margin-right:auto;margin-left:auto;">
        <tbody>
          <tr>
            <td style="padding:20px;width:100%;vertical-align:middle">
              <heading>{{SECTION_TITLE}}</heading>
            </td>
          </tr>
        </tbody>
      </table>"##;

const PERSON_PROFILE: &str = r##"
      <table style="width:100%;border:0px;border-spacing:0px;border-collapse:separate;margin-right:auto;margin-left:auto;">
        <tbody>
          <tr>
            <td style="padding:20px;width:25%;vertical-align:middle">
              <img src="{{IMAGE_PATH}}" style="{{IMAGE_STYLE}}" width="160">
            </td>
            <td style="padding:20px;width:75%;vertical-align:middle">
              <papertitle>{{NAME}}</papertitle>
              <br>
              {{TITLE}}{{AFFILIATION}}
              <br>
              <p>
                {{PROFILE_LINKS}}
              </p>
            </td>
          </tr>
        </tbody>
      </table>"##;

const ROBOT_PROFILE: &str = r##"
              <tr>
                <td style="padding:20px;width:25%;vertical-align:middle">
                  <img src="{{IMAGE_PATH}}" width="160">
                </td>
                <td style="padding:20px;width:75%;vertical-align:middle">
                  <papertitle>{{NAME}}</papertitle>
                  <br>
                  {{MANUFACTURER}}
                </td>
              </tr>"##;

const NEWS_ITEM: &str = r##"
      <table style="width:100%;border:0px;border-spacing:0px;border-collapse:separate;margin-right:auto;margin-left:auto;">
        <tbody>
          <tr>
            <td style="padding:20px;width:25%;vertical-align:middle">
              <img src="{{IMAGE_PATH}}" width="160">
            </td>
            <td style="padding:20px;width:75%;vertical-align:middle">
              <papertitle>{{TITLE}}</papertitle>
              <br>
              <em>{{DATE}}</em>
              <p>{{DESCRIPTION}}</p>
            </td>
          </tr>
        </tbody>
      </table>"##;

const DEFAULT_SITE: &str = r#"{
  "site": {
    "title": "Human-Robot Collaboration Lab",
    "logo": "assets/images/general/logo.png",
    "favicon": "assets/images/general/favicon.png",
    "github": "https://github.com/"
  },
  "navigation": [
    { "label": "Home", "href": "index.html" },
    { "label": "People", "href": "pages/people.html" },
    { "label": "News", "href": "pages/news.html" },
    { "label": "Research", "href": "pages/research.html" }
  ],
  "lab": {
    "description": "We study how robots and people can work side by side.",
    "location": {
      "address": "1 University Road",
      "mapLink": "https://maps.google.com/",
      "lab": "Room 101",
      "office": "Room 202"
    },
    "researchDescription": "Our research covers shared autonomy, learning from demonstration and safe physical interaction."
  }
}
"#;

const DEFAULT_PEOPLE: &str = r#"{
  "director": [
    {
      "name": "Lab Director",
      "title": "Professor",
      "affiliation": "Department of Mechanical Engineering",
      "image": "assets/images/people/director.png",
      "imageStyle": "border-radius: 50%;",
      "links": {
        "homepage": "https://example.com/",
        "scholar": "https://scholar.google.com/",
        "email": "director@example.com"
      }
    }
  ],
  "phdStudents": [
    {
      "name": "PhD Student",
      "title": "PhD Student",
      "image": "assets/images/people/phd.png",
      "links": { "linkedin": "https://www.linkedin.com/" }
    }
  ],
  "mastersStudents": [
    {
      "name": "Masters Student",
      "title": "Masters Student",
      "image": "assets/images/people/masters.png"
    }
  ],
  "collaborators": [],
  "robots": [
    {
      "name": "Robot Arm",
      "manufacturer": "Example Robotics",
      "image": "assets/images/robots/arm.png"
    }
  ]
}
"#;

const DEFAULT_NEWS: &str = r#"{
  "awards": [
    {
      "title": "Best Paper Award",
      "date": "January 2025",
      "description": "Our paper on shared autonomy received the best paper award.",
      "image": "assets/images/news/award.png"
    }
  ],
  "events": [],
  "research": []
}
"#;
