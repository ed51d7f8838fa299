//! Required-file inventory
//!
//! The declared table of files an asset tree must contain before it can be
//! bundled. Built once at startup and never mutated afterwards.

use crate::domain::value_objects::AssetPath;

/// Well-known category names used for manifest inventory counts
pub mod categories {
    pub const DOMAIN_ATOMS: &str = "DOMAIN_ATOMS";
    pub const ARCHETYPES: &str = "ARCHETYPES";
    pub const GOVERNANCE_CORE: &str = "GOVERNANCE_CORE";
    pub const PROTOCOLS: &str = "PROTOCOLS";
    pub const CLOUDFLARE_WORKER: &str = "CLOUDFLARE_WORKER";
    pub const OPENAI_CUSTOM_GPTS: &str = "OPENAI_CUSTOM_GPTS";
    pub const CI_WORKFLOWS: &str = "CI_WORKFLOWS";
    pub const META: &str = "META";
}

const BUILTIN_CATEGORIES: &[(&str, &[&str])] = &[
    (
        categories::DOMAIN_ATOMS,
        &[
            "domains/domain-01-content.system.prompt.md",
            "domains/domain-02-analysis.system.prompt.md",
            "domains/domain-03-project-management.system.prompt.md",
            "domains/domain-04-marketing.system.prompt.md",
            "domains/domain-05-product.system.prompt.md",
            "domains/domain-06-education.system.prompt.md",
            "domains/domain-07-personal.system.prompt.md",
            "domains/domain-08-business.system.prompt.md",
            "domains/domain-09-technical.system.prompt.md",
            "domains/domain-10-communication.system.prompt.md",
        ],
    ),
    (
        categories::ARCHETYPES,
        &[
            "archetypes/product-thinker.system.prompt.md",
            "archetypes/growth-operator.system.prompt.md",
            "archetypes/learning-designer.system.prompt.md",
            "archetypes/delivery-planner.system.prompt.md",
        ],
    ),
    (
        categories::GOVERNANCE_CORE,
        &["versions/prompt-manifest.json", "versions/prompt-lock.json"],
    ),
    (
        categories::PROTOCOLS,
        &[
            "protocols/handoff.schema.md",
            "protocols/response.schema.md",
            "protocols/orchestration.rules.md",
            "protocols/refusal.rules.md",
        ],
    ),
    (
        categories::CLOUDFLARE_WORKER,
        &[
            "cloudflare-worker/index.js",
            "cloudflare-worker/wrangler.toml",
            "cloudflare-worker/prompt-lock.json",
            "cloudflare-worker/dispatcher.contract.md",
        ],
    ),
    (
        categories::OPENAI_CUSTOM_GPTS,
        &[
            "openai-custom-gpts/atoms/domain-01-content.gpt.json",
            "openai-custom-gpts/atoms/domain-02-analysis.gpt.json",
            "openai-custom-gpts/atoms/domain-03-project-management.gpt.json",
            "openai-custom-gpts/atoms/domain-04-marketing.gpt.json",
            "openai-custom-gpts/atoms/domain-05-product.gpt.json",
            "openai-custom-gpts/atoms/domain-06-education.gpt.json",
            "openai-custom-gpts/atoms/domain-07-personal.gpt.json",
            "openai-custom-gpts/atoms/domain-08-business.gpt.json",
            "openai-custom-gpts/atoms/domain-09-technical.gpt.json",
            "openai-custom-gpts/atoms/domain-10-communication.gpt.json",
            "openai-custom-gpts/archetypes/delivery-planner.gpt.json",
            "openai-custom-gpts/archetypes/growth-operator.gpt.json",
            "openai-custom-gpts/archetypes/learning-designer.gpt.json",
            "openai-custom-gpts/archetypes/product-thinker.gpt.json",
            "openai-custom-gpts/orchestrator/orchestrator.gpt.json",
        ],
    ),
    (
        categories::CI_WORKFLOWS,
        &[
            ".github/workflows/schema-validation.yml",
            ".github/workflows/version-hash-enforcement.yml",
            ".github/workflows/forbidden-file-changes.yml",
            ".github/workflows/archetype-composition-validation.yml",
            ".github/workflows/cloudflare-deploy.yml",
        ],
    ),
    (categories::META, &["README.md", "CHANGELOG.md", "SECURITY.md"]),
];

const BUILTIN_OPTIONAL: &[&str] = &[
    "cloudflare-worker/package.json",
    "cloudflare-worker/package-lock.json",
];

/// A named, ordered group of required files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    name: String,
    files: Vec<AssetPath>,
}

impl Category {
    pub fn new(name: impl Into<String>, files: Vec<AssetPath>) -> Self {
        Self {
            name: name.into(),
            files,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn files(&self) -> &[AssetPath] {
        &self.files
    }
}

/// One required file together with the category that declared it
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequiredFileEntry<'a> {
    pub path: &'a AssetPath,
    pub category: &'a str,
}

/// Immutable lookup table of required and optional files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredFiles {
    categories: Vec<Category>,
    optional: Vec<AssetPath>,
}

impl RequiredFiles {
    pub fn new(categories: Vec<Category>, optional: Vec<AssetPath>) -> Self {
        Self {
            categories,
            optional,
        }
    }

    /// The table shipped with the tool for prompt-pack repositories
    pub fn builtin() -> Self {
        let categories = BUILTIN_CATEGORIES
            .iter()
            .map(|(name, files)| {
                Category::new(
                    *name,
                    files.iter().filter_map(|f| AssetPath::new(f).ok()).collect(),
                )
            })
            .collect();
        let optional = BUILTIN_OPTIONAL
            .iter()
            .filter_map(|f| AssetPath::new(f).ok())
            .collect();
        Self::new(categories, optional)
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn optional(&self) -> &[AssetPath] {
        &self.optional
    }

    /// Required files in declaration order
    pub fn entries(&self) -> impl Iterator<Item = RequiredFileEntry<'_>> {
        self.categories.iter().flat_map(|c| {
            c.files.iter().map(move |path| RequiredFileEntry {
                path,
                category: c.name.as_str(),
            })
        })
    }

    pub fn total_required(&self) -> usize {
        self.categories.iter().map(|c| c.files.len()).sum()
    }

    /// Number of files declared under `category` (0 when absent)
    pub fn count(&self, category: &str) -> usize {
        self.categories
            .iter()
            .filter(|c| c.name == category)
            .map(|c| c.files.len())
            .sum()
    }
}

impl Default for RequiredFiles {
    fn default() -> Self {
        Self::builtin()
    }
}
