//! The configuration synthesizer.
//!
//! Merges the mode/serve decisions with the loaded compiler config, the
//! CSS-modules policy, and the resolved paths into the final
//! configuration object. Deterministic and total: every failure mode was
//! already raised upstream, and no I/O happens here.

use std::path::{Path, PathBuf};

use indexmap::IndexMap;
use serde_json::json;
use tracing::debug;

use crate::context::BuildContext;
use crate::css::{CssModulePolicy, CssScope};
use crate::paths::ResolvedPaths;
use crate::swc::SwcConfig;
use crate::webpack::{
    AssetGenerator, AssetParser, BundlerConfig, CacheGroup, CssLoaderOptions, CssModulesOptions,
    DataUrlCondition, DevServerOptions, Devtool, LoaderEntry, ModuleOptions, ModuleRule,
    OptimizationOptions, OutputOptions, PerformanceHints, PerformanceOptions, PluginDescriptor,
    PluginList, PostcssLoaderOptions, PostcssOptions, ResolveOptions, SplitChunksOptions,
};

// Processing stages, named the way the bundler resolves them.
const COMPILER_LOADER: &str = "swc-loader";
const MARKUP_LOADER: &str = "@mdx-js/loader";
const CSS_EXTRACT_LOADER: &str = "mini-css-extract-plugin/loader";
const CSS_LOADER: &str = "css-loader";
const POSTCSS_LOADER: &str = "postcss-loader";

// Filename templates. The hashed forms are reserved for one-shot builds;
// hashing breaks in-place module exchange.
const HASHED_JS: &str = "js/[name].[contenthash].js";
const PLAIN_JS: &str = "js/[name].js";
const HASHED_CSS: &str = "css/[name].[contenthash].css";
const PLAIN_CSS: &str = "css/[name].css";

/// Produce the complete configuration for one invocation.
pub fn synthesize(
    context: &BuildContext,
    swc: &SwcConfig,
    policy: &CssModulePolicy,
    paths: &ResolvedPaths,
    postcss_config: &Path,
) -> BundlerConfig {
    let serve = context.serve;
    debug!(mode = ?context.mode, serve, "synthesizing bundler configuration");

    let js_filename = if serve { PLAIN_JS } else { HASHED_JS };

    BundlerConfig {
        entry: entry_sequence(paths),
        mode: context.mode,
        output: OutputOptions {
            public_path: "/".to_string(),
            path: paths.output.clone(),
            filename: js_filename.to_string(),
            clean: true,
        },
        devtool: if serve {
            Devtool::EvalSourceMap
        } else {
            Devtool::Disabled
        },
        // Bundler and compiler share one support matrix, with the
        // compiler config as the source of truth.
        target: format!("browserslist:{}", swc.targets()),
        module: ModuleOptions {
            rules: module_rules(swc, policy, postcss_config),
        },
        dev_server: serve.then(DevServerOptions::default),
        plugins: plugin_list(serve, paths),
        resolve: resolve_options(context),
        optimization: optimization(),
        performance: PerformanceOptions {
            hints: if context.is_production() {
                PerformanceHints::Warning
            } else {
                PerformanceHints::Disabled
            },
        },
    }
}

/// Global styles first, so component-scoped styles loaded later can
/// override global rules through normal cascade order.
fn entry_sequence(paths: &ResolvedPaths) -> Vec<PathBuf> {
    let mut entry = Vec::with_capacity(2);
    if let Some(global) = &paths.global_css {
        entry.push(global.clone());
    }
    entry.push(paths.app_entry.clone());
    entry
}

fn module_rules(
    swc: &SwcConfig,
    policy: &CssModulePolicy,
    postcss_config: &Path,
) -> Vec<ModuleRule> {
    let compiler = LoaderEntry::with_options(COMPILER_LOADER, swc.as_value().clone());

    vec![
        ModuleRule::chain(r"\.(ts|tsx)$", vec![compiler.clone()]).exclude("node_modules"),
        // Hybrid script+markup files share the compiler stage; markup
        // extraction runs after it.
        ModuleRule::chain(
            r"\.mdx?$",
            vec![compiler, LoaderEntry::bare(MARKUP_LOADER)],
        )
        .exclude("node_modules"),
        stylesheet_rule(r"\.module\.css$", None, CssScope::Local, policy, postcss_config),
        stylesheet_rule(
            r"\.css$",
            Some(r"\.module\.css$"),
            CssScope::Global,
            policy,
            postcss_config,
        ),
        ModuleRule::asset(
            r"\.(jpg|gif|png|svg)$",
            AssetParser {
                data_url_condition: DataUrlCondition {
                    max_size: 10 * 1024,
                },
            },
        ),
        ModuleRule::asset_resource(
            r"\.(woff|woff2|ttf|eot)$",
            AssetGenerator {
                filename: "fonts/[name][ext]".to_string(),
            },
        ),
    ]
}

/// The two stylesheet chains share the extraction and dependency-resolution
/// stages; only the modules scope differs.
fn stylesheet_rule(
    test: &str,
    exclude: Option<&str>,
    scope: CssScope,
    policy: &CssModulePolicy,
    postcss_config: &Path,
) -> ModuleRule {
    let rule = ModuleRule::chain(
        test,
        vec![
            LoaderEntry::bare(CSS_EXTRACT_LOADER),
            LoaderEntry::with_options(
                CSS_LOADER,
                CssLoaderOptions {
                    import: true,
                    import_loaders: 1,
                    modules: CssModulesOptions {
                        policy: policy.clone(),
                        mode: scope,
                    },
                },
            ),
            LoaderEntry::with_options(
                POSTCSS_LOADER,
                PostcssLoaderOptions {
                    postcss_options: PostcssOptions {
                        config: postcss_config.to_path_buf(),
                    },
                },
            ),
        ],
    );

    match exclude {
        Some(pattern) => rule.exclude(pattern),
        None => rule,
    }
}

fn plugin_list(serve: bool, paths: &ResolvedPaths) -> Vec<PluginDescriptor> {
    let css_filename = if serve { PLAIN_CSS } else { HASHED_CSS };

    PluginList::new()
        .push(PluginDescriptor::new(
            "html-webpack-plugin",
            json!({
                "template": paths.html_template,
                "favicon": paths.favicon,
            }),
        ))
        .push(PluginDescriptor::new(
            "mini-css-extract-plugin",
            json!({ "filename": css_filename }),
        ))
        .push(PluginDescriptor::new(
            "dotenv-webpack",
            json!({ "path": paths.dotenv }),
        ))
        .push(PluginDescriptor::new(
            "copy-webpack-plugin",
            json!({
                "patterns": [{ "from": paths.robots, "to": "robots.txt" }],
            }),
        ))
        .push_if(
            serve,
            PluginDescriptor::new("webpack-bundle-analyzer", json!({ "openAnalyzer": false })),
        )
        .push_if(
            serve,
            PluginDescriptor::bare("@pmmmwh/react-refresh-webpack-plugin"),
        )
        .into_vec()
}

fn resolve_options(context: &BuildContext) -> ResolveOptions {
    let mut alias = IndexMap::new();
    alias.insert("@self".to_string(), context.root.join("src"));

    ResolveOptions {
        extensions: [".tsx", ".ts", ".jsx", ".js"]
            .iter()
            .map(|ext| ext.to_string())
            .collect(),
        alias,
    }
}

/// Two cache groups partition third-party code: the UI-runtime pair gets
/// its own higher-priority chunk so runtime upgrades do not invalidate
/// the catch-all vendor chunk.
fn optimization() -> OptimizationOptions {
    let mut cache_groups = IndexMap::new();
    cache_groups.insert(
        "react".to_string(),
        CacheGroup {
            test: r"[/\\]node_modules[/\\]react(-dom)?[/\\]".to_string(),
            name: "react".to_string(),
            chunks: "all".to_string(),
            priority: 10,
        },
    );
    cache_groups.insert(
        "vendors".to_string(),
        CacheGroup {
            test: r"[/\\]node_modules[/\\]".to_string(),
            name: "vendors".to_string(),
            chunks: "all".to_string(),
            priority: 5,
        },
    );

    OptimizationOptions {
        used_exports: true,
        runtime_chunk: false,
        split_chunks: SplitChunksOptions {
            chunks: "all".to_string(),
            cache_groups,
        },
    }
}
