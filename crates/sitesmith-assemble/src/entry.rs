//! Entry-point module artifacts

use sitesmith_core::layout::pascal_case;
use sitesmith_core::{Artifact, ArtifactKind, Configuration};
use sitesmith_features::ResolvedFeatures;

pub fn generate(config: &Configuration, resolved: &ResolvedFeatures) -> Vec<Artifact> {
    vec![
        Artifact::new("src/index.jsx", index_module(config), ArtifactKind::Entry),
        Artifact::new("src/App.jsx", app_module(resolved), ArtifactKind::Entry),
    ]
}

fn index_module(config: &Configuration) -> String {
    format!(
        "import React from 'react';\n\
         import ReactDOM from 'react-dom/client';\n\
         import App from './App';\n\
         import './styles/global.css';\n\n\
         // {business}\n\
         ReactDOM.createRoot(document.getElementById('root')).render(\n\
         {i}<React.StrictMode>\n\
         {i}{i}<App />\n\
         {i}</React.StrictMode>\n\
         );\n",
        business = config.business_name,
        i = "  ",
    )
}

/// App shell with one route per resolved page. `home` is the index route.
fn app_module(resolved: &ResolvedFeatures) -> String {
    let mut imports = String::new();
    let mut routes = String::new();

    for token in &resolved.pages {
        let name = pascal_case(token);
        imports.push_str(&format!("import {name} from './pages/{name}';\n"));
        let path = if token == "home" {
            "/".to_string()
        } else {
            format!("/{token}")
        };
        routes.push_str(&format!(
            "        <Route path=\"{path}\" element={{<{name} />}} />\n"
        ));
    }

    format!(
        "import {{ BrowserRouter, Routes, Route }} from 'react-router-dom';\n\
         import Navigation from './components/Navigation';\n\
         import Footer from './components/Footer';\n\
         {imports}\n\
         export default function App() {{\n\
         {i}return (\n\
         {i}{i}<BrowserRouter>\n\
         {i}{i}{i}<Navigation />\n\
         {i}{i}{i}<Routes>\n\
         {routes}\
         {i}{i}{i}</Routes>\n\
         {i}{i}{i}<Footer />\n\
         {i}{i}</BrowserRouter>\n\
         {i});\n\
         }}\n",
        i = "  ",
    )
}
