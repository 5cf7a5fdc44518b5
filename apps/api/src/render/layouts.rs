//! askama templates, one per presentation mode, plus the printable page
//! wrapper. Markup and per-layout CSS live under `templates/`.

use askama::Template;

use crate::render::view::DocumentView;

#[derive(Template)]
#[template(path = "layouts/classic.html")]
pub struct ClassicLayout<'a> {
    pub view: &'a DocumentView<'a>,
}

#[derive(Template)]
#[template(path = "layouts/minimal.html")]
pub struct MinimalLayout<'a> {
    pub view: &'a DocumentView<'a>,
}

#[derive(Template)]
#[template(path = "layouts/contemporary.html")]
pub struct ContemporaryLayout<'a> {
    pub view: &'a DocumentView<'a>,
}

#[derive(Template)]
#[template(path = "page.html")]
pub struct PrintablePage<'a> {
    pub title: &'a str,
    pub template_id: &'a str,
    pub body: &'a str,
}
