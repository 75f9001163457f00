// Renders a BuildConfig as the bundler's config module.

use crate::modules::client_build::core::build_config::BuildConfig;
use crate::modules::client_build::core::plugin::ImportBinding;

pub fn render_vite_config(config: &BuildConfig) -> String {
    let imports: String = config
        .plugins
        .iter()
        .map(|plugin| match plugin.binding() {
            ImportBinding::Default(name) => {
                format!("import {name} from \"{}\";\n", plugin.package())
            }
            ImportBinding::Named(name) => {
                format!("import {{ {name} }} from \"{}\";\n", plugin.package())
            }
        })
        .collect();
    let calls: Vec<String> = config.plugins.iter().map(|p| p.factory_call()).collect();

    format!(
        "import {{ defineConfig }} from \"vite\";\n{imports}\nexport default defineConfig({{\n  plugins: [{}],\n  build: {{\n    target: \"{}\",\n  }},\n}});\n",
        calls.join(", "),
        config.build.target.as_str()
    )
}

pub fn render_json(config: &BuildConfig) -> serde_json::Result<String> {
    serde_json::to_string_pretty(config)
}
