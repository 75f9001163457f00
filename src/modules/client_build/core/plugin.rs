use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportBinding {
    Default(&'static str),
    Named(&'static str),
}

impl ImportBinding {
    pub fn local_name(&self) -> &'static str {
        match self {
            ImportBinding::Default(name) | ImportBinding::Named(name) => *name,
        }
    }
}

/// Bundler plugins in the client build. Plugins run in the order they are listed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Plugin {
    /// Utility-CSS compiler.
    Tailwindcss,
    /// Reactive UI framework integration.
    Solid,
    /// Web app manifest and service worker generator.
    Pwa,
}

impl Plugin {
    pub fn package(&self) -> &'static str {
        match self {
            Plugin::Tailwindcss => "@tailwindcss/vite",
            Plugin::Solid => "vite-plugin-solid",
            Plugin::Pwa => "vite-plugin-pwa",
        }
    }

    pub fn binding(&self) -> ImportBinding {
        match self {
            Plugin::Tailwindcss => ImportBinding::Default("tailwindcss"),
            Plugin::Solid => ImportBinding::Default("solid"),
            Plugin::Pwa => ImportBinding::Named("VitePWA"),
        }
    }

    /// Plugins are activated with their default options.
    pub fn factory_call(&self) -> String {
        format!("{}()", self.binding().local_name())
    }
}

#[cfg(test)]
mod plugin_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Plugin::Tailwindcss, "@tailwindcss/vite", "tailwindcss()")]
    #[case(Plugin::Solid, "vite-plugin-solid", "solid()")]
    #[case(Plugin::Pwa, "vite-plugin-pwa", "VitePWA()")]
    fn it_should_describe_the_plugin(
        #[case] plugin: Plugin,
        #[case] package: &str,
        #[case] call: &str,
    ) {
        assert_eq!(plugin.package(), package);
        assert_eq!(plugin.factory_call(), call);
    }

    #[rstest]
    fn it_should_import_the_pwa_plugin_by_name() {
        assert_eq!(Plugin::Pwa.binding(), ImportBinding::Named("VitePWA"));
        assert_eq!(
            Plugin::Solid.binding(),
            ImportBinding::Default("solid")
        );
    }
}
