//! Template identifiers and the template set compiled into the binary

/// Every template the generator knows how to render
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TemplateId {
    // view
    Functional,
    Class,
    Pure,
    StatelessIndex,
    ConnectedIndex,
    Props,
    ViewTest,
    Story,
    Styles,
    // package
    PackageJson,
    // state
    Actions,
    Constants,
    DuckIndex,
    Reducer,
    DuckTest,
    Selectors,
    Reselectors,
}

impl TemplateId {
    pub const ALL: [TemplateId; 17] = [
        TemplateId::Functional,
        TemplateId::Class,
        TemplateId::Pure,
        TemplateId::StatelessIndex,
        TemplateId::ConnectedIndex,
        TemplateId::Props,
        TemplateId::ViewTest,
        TemplateId::Story,
        TemplateId::Styles,
        TemplateId::PackageJson,
        TemplateId::Actions,
        TemplateId::Constants,
        TemplateId::DuckIndex,
        TemplateId::Reducer,
        TemplateId::DuckTest,
        TemplateId::Selectors,
        TemplateId::Reselectors,
    ];

    /// Path relative to a template directory, also the registry name
    pub fn path(&self) -> &'static str {
        match self {
            TemplateId::Functional => "view/functional.js.hbs",
            TemplateId::Class => "view/class.js.hbs",
            TemplateId::Pure => "view/pure.js.hbs",
            TemplateId::StatelessIndex => "view/stateless-index.js.hbs",
            TemplateId::ConnectedIndex => "view/index.js.hbs",
            TemplateId::Props => "view/props.js.hbs",
            TemplateId::ViewTest => "view/test.js.hbs",
            TemplateId::Story => "view/story.js.hbs",
            TemplateId::Styles => "view/styles.css.hbs",
            TemplateId::PackageJson => "package/package.json.hbs",
            TemplateId::Actions => "state/actions.js.hbs",
            TemplateId::Constants => "state/constants.js.hbs",
            TemplateId::DuckIndex => "state/index.js.hbs",
            TemplateId::Reducer => "state/reducer.js.hbs",
            TemplateId::DuckTest => "state/test.js.hbs",
            TemplateId::Selectors => "state/selectors.js.hbs",
            TemplateId::Reselectors => "state/reselectors.js.hbs",
        }
    }

    /// Built-in template content
    pub fn embedded(&self) -> &'static str {
        match self {
            TemplateId::Functional => include_str!("../../templates/view/functional.js.hbs"),
            TemplateId::Class => include_str!("../../templates/view/class.js.hbs"),
            TemplateId::Pure => include_str!("../../templates/view/pure.js.hbs"),
            TemplateId::StatelessIndex => {
                include_str!("../../templates/view/stateless-index.js.hbs")
            }
            TemplateId::ConnectedIndex => include_str!("../../templates/view/index.js.hbs"),
            TemplateId::Props => include_str!("../../templates/view/props.js.hbs"),
            TemplateId::ViewTest => include_str!("../../templates/view/test.js.hbs"),
            TemplateId::Story => include_str!("../../templates/view/story.js.hbs"),
            TemplateId::Styles => include_str!("../../templates/view/styles.css.hbs"),
            TemplateId::PackageJson => include_str!("../../templates/package/package.json.hbs"),
            TemplateId::Actions => include_str!("../../templates/state/actions.js.hbs"),
            TemplateId::Constants => include_str!("../../templates/state/constants.js.hbs"),
            TemplateId::DuckIndex => include_str!("../../templates/state/index.js.hbs"),
            TemplateId::Reducer => include_str!("../../templates/state/reducer.js.hbs"),
            TemplateId::DuckTest => include_str!("../../templates/state/test.js.hbs"),
            TemplateId::Selectors => include_str!("../../templates/state/selectors.js.hbs"),
            TemplateId::Reselectors => include_str!("../../templates/state/reselectors.js.hbs"),
        }
    }
}
