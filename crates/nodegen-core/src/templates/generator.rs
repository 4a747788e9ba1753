//! Materializes a template on disk
//!
//! Generation is a fixed chain of steps. Each step runs only after the
//! previous one succeeded; the first error aborts the chain and leaves
//! whatever was already written in place.

use super::manifest::rewrite_manifest;
use super::TemplateSpec;
use crate::error::ScaffoldError;
use crate::request::ScaffoldRequest;
use crate::runtime::PackageManager;
use std::path::{Path, PathBuf};
use tokio::fs;

/// One stage of the generation protocol, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Reserve,
    Skeleton,
    InitManifest,
    Install,
    WriteFiles,
    TypeConfig,
    RewriteManifest,
}

impl Step {
    pub const ALL: [Step; 7] = [
        Step::Reserve,
        Step::Skeleton,
        Step::InitManifest,
        Step::Install,
        Step::WriteFiles,
        Step::TypeConfig,
        Step::RewriteManifest,
    ];

    /// Whether the step has any work for this template
    pub fn applies_to(self, template: &TemplateSpec) -> bool {
        match self {
            Step::Install => template.has_dependencies(),
            Step::TypeConfig => template.type_config.is_some(),
            _ => true,
        }
    }

    /// Spinner text while the step runs
    pub fn progress_message(self) -> &'static str {
        match self {
            Step::Reserve => "Checking project directory...",
            Step::Skeleton => "Setting up folder structure...",
            Step::InitManifest => "Initialising node project...",
            Step::Install => "Installing all dependencies...",
            Step::WriteFiles => "Adding important files...",
            Step::TypeConfig => "Initialising TypeScript...",
            Step::RewriteManifest => "Doing final touches...",
        }
    }

    /// Spinner text once the step succeeded
    pub fn success_message(self) -> &'static str {
        match self {
            Step::Reserve => "Project directory is free",
            Step::Skeleton => "Set up folder structure",
            Step::InitManifest => "Initialised the project",
            Step::Install => "Installed all dependencies",
            Step::WriteFiles => "Added the files",
            Step::TypeConfig => "Initialised TypeScript",
            Step::RewriteManifest => "Completed final edits",
        }
    }

    /// Spinner text when the step aborts the run
    pub fn failure_message(self) -> &'static str {
        match self {
            Step::Reserve => "That directory seems to already exist!",
            Step::Skeleton => "Could not set up the folder structure",
            Step::InitManifest => "An error occurred while initialising the project!",
            Step::Install => "An error occurred while installing dependencies!",
            Step::WriteFiles => "Could not add the project files",
            Step::TypeConfig => "Could not initialise TypeScript",
            Step::RewriteManifest => "Could not finish editing package.json",
        }
    }
}

/// Runs the generation steps for one request
pub struct ProjectGenerator<'a, P: PackageManager> {
    request: &'a ScaffoldRequest,
    template: &'static TemplateSpec,
    package_manager: &'a P,
}

impl<'a, P: PackageManager> ProjectGenerator<'a, P> {
    pub fn new(
        request: &'a ScaffoldRequest,
        template: &'static TemplateSpec,
        package_manager: &'a P,
    ) -> Self {
        Self {
            request,
            template,
            package_manager,
        }
    }

    pub fn template(&self) -> &'static TemplateSpec {
        self.template
    }

    /// Steps this template will run, in order
    pub fn steps(&self) -> impl Iterator<Item = Step> + '_ {
        Step::ALL
            .into_iter()
            .filter(move |step| step.applies_to(self.template))
    }

    /// Run every applicable step without any UI
    pub async fn generate(&self) -> Result<(), ScaffoldError> {
        for step in self.steps() {
            self.run_step(step).await?;
        }
        Ok(())
    }

    /// Execute a single step
    pub async fn run_step(&self, step: Step) -> Result<(), ScaffoldError> {
        match step {
            Step::Reserve => self.reserve(),
            Step::Skeleton => self.create_skeleton().await,
            Step::InitManifest => self.package_manager.init(self.root()).await,
            Step::Install => self.install_dependencies().await,
            Step::WriteFiles => self.write_files().await.map(|_| ()),
            Step::TypeConfig => self.write_type_config().await,
            Step::RewriteManifest => {
                rewrite_manifest(&self.manifest_path(), &self.template.manifest).await
            }
        }
    }

    fn root(&self) -> &Path {
        self.request.target_dir()
    }

    fn manifest_path(&self) -> PathBuf {
        self.root().join("package.json")
    }

    /// The target must not exist yet; checked once, before anything is created
    fn reserve(&self) -> Result<(), ScaffoldError> {
        let root = self.root();
        if root.exists() {
            return Err(ScaffoldError::DirectoryExists(root.to_path_buf()));
        }
        Ok(())
    }

    async fn create_skeleton(&self) -> Result<(), ScaffoldError> {
        let root = self.root();

        // Not create_dir_all: a directory appearing since Reserve must fail here
        fs::create_dir(root)
            .await
            .map_err(|e| ScaffoldError::fs("create directory", root, e))?;

        for dir in self.template.skeleton {
            let path = root.join(dir);
            fs::create_dir_all(&path)
                .await
                .map_err(|e| ScaffoldError::fs("create directory", &path, e))?;
        }

        Ok(())
    }

    async fn install_dependencies(&self) -> Result<(), ScaffoldError> {
        let root = self.root();
        self.package_manager
            .install(root, self.template.dependencies, false)
            .await?;
        self.package_manager
            .install(root, self.template.dev_dependencies, true)
            .await
    }

    /// Write every template file in order; returns the paths written
    pub async fn write_files(&self) -> Result<Vec<PathBuf>, ScaffoldError> {
        let mut written = Vec::with_capacity(self.template.files.len());

        for file in self.template.files {
            let target_path = self.root().join(file.path);
            if let Some(parent) = target_path.parent() {
                fs::create_dir_all(parent)
                    .await
                    .map_err(|e| ScaffoldError::fs("create directory", parent, e))?;
            }

            fs::write(&target_path, file.contents)
                .await
                .map_err(|e| ScaffoldError::fs("write", &target_path, e))?;

            written.push(target_path);
        }

        Ok(written)
    }

    async fn write_type_config(&self) -> Result<(), ScaffoldError> {
        let Some(contents) = self.template.type_config else {
            return Ok(());
        };

        let path = self.root().join("tsconfig.json");
        fs::write(&path, contents)
            .await
            .map_err(|e| ScaffoldError::fs("write", &path, e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::request::{Category, Framework, Language};
    use crate::templates::TemplateId;
    use serde_json::Value;
    use std::sync::Mutex;
    use walkdir::WalkDir;

    /// Records calls and writes the manifest `npm init -y` would
    #[derive(Default)]
    struct FakePackageManager {
        installs: Mutex<Vec<(Vec<String>, bool)>>,
        fail_install: bool,
    }

    impl FakePackageManager {
        fn failing_install() -> Self {
            Self {
                fail_install: true,
                ..Self::default()
            }
        }

        fn installs(&self) -> Vec<(Vec<String>, bool)> {
            self.installs.lock().unwrap().clone()
        }
    }

    impl PackageManager for FakePackageManager {
        async fn init(&self, dir: &Path) -> Result<(), ScaffoldError> {
            let name = dir.file_name().unwrap().to_string_lossy();
            let manifest = format!(
                "{{\n  \"name\": \"{}\",\n  \"version\": \"1.0.0\",\n  \"main\": \"index.js\",\n  \"scripts\": {{\n    \"test\": \"exit 1\"\n  }},\n  \"license\": \"ISC\"\n}}\n",
                name
            );
            std::fs::write(dir.join("package.json"), manifest)
                .map_err(|e| ScaffoldError::fs("write", dir, e))
        }

        async fn install(
            &self,
            _dir: &Path,
            packages: &[&str],
            dev: bool,
        ) -> Result<(), ScaffoldError> {
            if packages.is_empty() {
                return Ok(());
            }
            if self.fail_install {
                return Err(ScaffoldError::ExternalProcess {
                    command: "npm install".to_string(),
                    reason: "exit code 1".to_string(),
                });
            }
            self.installs
                .lock()
                .unwrap()
                .push((packages.iter().map(|p| p.to_string()).collect(), dev));
            Ok(())
        }
    }

    fn request(
        base: &Path,
        category: Category,
        language: Language,
        framework: Option<Framework>,
        name: &str,
    ) -> ScaffoldRequest {
        ScaffoldRequest::new(category, language, framework, name, base)
    }

    /// Relative paths of every file under `root`, sorted
    fn file_tree(root: &Path) -> Vec<String> {
        let mut files: Vec<String> = WalkDir::new(root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .map(|e| {
                e.path()
                    .strip_prefix(root)
                    .unwrap()
                    .components()
                    .map(|c| c.as_os_str().to_string_lossy().into_owned())
                    .collect::<Vec<_>>()
                    .join("/")
            })
            .collect();
        files.sort();
        files
    }

    fn read_manifest(root: &Path) -> Value {
        let content = std::fs::read_to_string(root.join("package.json")).unwrap();
        serde_json::from_str(&content).unwrap()
    }

    #[tokio::test]
    async fn test_server_typescript_scenario() {
        let base = tempfile::tempdir().unwrap();
        let request = request(
            base.path(),
            Category::Server,
            Language::TypeScript,
            None,
            "demo",
        );
        let template = TemplateId::for_request(&request).unwrap().spec();
        let npm = FakePackageManager::default();

        ProjectGenerator::new(&request, template, &npm)
            .generate()
            .await
            .unwrap();

        let root = base.path().join("demo");
        assert_eq!(
            file_tree(&root),
            [".env", "package.json", "src/index.ts", "tsconfig.json"]
        );

        let index = std::fs::read_to_string(root.join("src/index.ts")).unwrap();
        assert!(index.contains("app.listen(process.env.PORT"));
        assert_eq!(std::fs::read_to_string(root.join(".env")).unwrap(), "PORT=8085");

        let manifest = read_manifest(&root);
        assert_eq!(manifest["name"], "demo");
        assert_eq!(manifest["type"], "module");
        assert_eq!(manifest["main"], "./dist/index.js");
        for script in ["build", "dev", "start"] {
            assert!(manifest["scripts"][script].is_string(), "missing {}", script);
        }

        assert_eq!(
            npm.installs(),
            [
                (vec!["express".to_string(), "dotenv".to_string()], false),
                (
                    ["@types/node", "@types/express", "typescript", "rimraf", "nodemon"]
                        .iter()
                        .map(|s| s.to_string())
                        .collect(),
                    true
                ),
            ]
        );
    }

    #[tokio::test]
    async fn test_empty_javascript_scenario() {
        let base = tempfile::tempdir().unwrap();
        let request = request(
            base.path(),
            Category::Empty,
            Language::JavaScript,
            None,
            "foo",
        );
        let template = TemplateId::for_request(&request).unwrap().spec();
        let npm = FakePackageManager::default();

        let generator = ProjectGenerator::new(&request, template, &npm);
        assert!(!generator.steps().any(|s| s == Step::Install || s == Step::TypeConfig));
        generator.generate().await.unwrap();

        let root = base.path().join("foo");
        assert_eq!(file_tree(&root), ["package.json", "src/index.js"]);
        assert_eq!(
            std::fs::read_to_string(root.join("src/index.js")).unwrap(),
            "console.log('Hello, World!');\n"
        );
        assert_eq!(read_manifest(&root)["main"], "./src/index.js");
        assert!(npm.installs().is_empty());
    }

    #[tokio::test]
    async fn test_every_template_produces_declared_tree() {
        for id in TemplateId::ALL {
            let base = tempfile::tempdir().unwrap();
            let (category, framework) = match id {
                TemplateId::ServerTs | TemplateId::ServerJs => (Category::Server, None),
                TemplateId::DiscordTs | TemplateId::DiscordJs => {
                    (Category::Bot, Some(Framework::DiscordJs))
                }
                TemplateId::OceanicTs | TemplateId::OceanicJs => {
                    (Category::Bot, Some(Framework::Oceanic))
                }
                TemplateId::EmptyTs | TemplateId::EmptyJs => (Category::Empty, None),
            };
            let request = request(base.path(), category, id.language(), framework, "proj");
            assert_eq!(TemplateId::for_request(&request).unwrap(), id);

            let npm = FakePackageManager::default();
            ProjectGenerator::new(&request, id.spec(), &npm)
                .generate()
                .await
                .unwrap();

            let root = base.path().join("proj");
            assert_eq!(file_tree(&root), id.spec().expected_files(), "{}", id);
            for dir in id.spec().skeleton {
                assert!(root.join(dir).is_dir(), "{} missing {}", id, dir);
            }
        }
    }

    #[tokio::test]
    async fn test_existing_directory_aborts_untouched() {
        let base = tempfile::tempdir().unwrap();
        let existing = base.path().join("taken");
        std::fs::create_dir(&existing).unwrap();
        std::fs::write(existing.join("keep.txt"), "mine").unwrap();

        let request = request(
            base.path(),
            Category::Server,
            Language::JavaScript,
            None,
            "taken",
        );
        let npm = FakePackageManager::default();
        let err = ProjectGenerator::new(&request, TemplateId::ServerJs.spec(), &npm)
            .generate()
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::DirectoryExists(_)));
        assert_eq!(file_tree(&existing), ["keep.txt"]);
        assert!(npm.installs().is_empty());
    }

    #[tokio::test]
    async fn test_skeleton_fails_if_directory_appears_after_reserve() {
        let base = tempfile::tempdir().unwrap();
        let request = request(
            base.path(),
            Category::Empty,
            Language::JavaScript,
            None,
            "racy",
        );
        let npm = FakePackageManager::default();
        let generator = ProjectGenerator::new(&request, TemplateId::EmptyJs.spec(), &npm);

        generator.run_step(Step::Reserve).await.unwrap();
        std::fs::create_dir(base.path().join("racy")).unwrap();

        let err = generator.run_step(Step::Skeleton).await.unwrap_err();
        assert!(matches!(err, ScaffoldError::FileSystem { .. }));
    }

    #[tokio::test]
    async fn test_install_failure_stops_before_files() {
        let base = tempfile::tempdir().unwrap();
        let request = request(
            base.path(),
            Category::Bot,
            Language::TypeScript,
            Some(Framework::Oceanic),
            "bot",
        );
        let npm = FakePackageManager::failing_install();
        let err = ProjectGenerator::new(&request, TemplateId::OceanicTs.spec(), &npm)
            .generate()
            .await
            .unwrap_err();

        assert!(matches!(err, ScaffoldError::ExternalProcess { .. }));

        // Earlier steps are not rolled back
        let root = base.path().join("bot");
        assert!(root.join("src/commands/Misc").is_dir());
        assert_eq!(file_tree(&root), ["package.json"]);
    }

    #[tokio::test]
    async fn test_corrupt_manifest_fails_final_step() {
        let base = tempfile::tempdir().unwrap();
        let request = request(
            base.path(),
            Category::Empty,
            Language::TypeScript,
            None,
            "broken",
        );
        let npm = FakePackageManager::default();
        let generator = ProjectGenerator::new(&request, TemplateId::EmptyTs.spec(), &npm);

        for step in generator.steps().filter(|s| *s != Step::RewriteManifest) {
            generator.run_step(step).await.unwrap();
        }
        std::fs::write(base.path().join("broken/package.json"), "not json").unwrap();

        let err = generator
            .run_step(Step::RewriteManifest)
            .await
            .unwrap_err();
        assert!(matches!(err, ScaffoldError::ManifestParse { .. }));
    }

    #[tokio::test]
    async fn test_write_files_reports_paths_in_order() {
        let base = tempfile::tempdir().unwrap();
        let request = request(
            base.path(),
            Category::Bot,
            Language::JavaScript,
            Some(Framework::DiscordJs),
            "classic",
        );
        let npm = FakePackageManager::default();
        let generator = ProjectGenerator::new(&request, TemplateId::DiscordJs.spec(), &npm);
        generator.run_step(Step::Reserve).await.unwrap();
        generator.run_step(Step::Skeleton).await.unwrap();

        let written = generator.write_files().await.unwrap();
        let root = base.path().join("classic");
        assert_eq!(written.len(), TemplateId::DiscordJs.spec().files.len());
        assert_eq!(written[0], root.join("src/index.js"));
        assert_eq!(written[1], root.join(".env"));
    }
}
