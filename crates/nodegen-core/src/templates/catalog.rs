//! Built-in template records
//!
//! File contents are embedded at compile time from the crate's `templates/`
//! directory so the binary works offline and ships versioned boilerplate.

use super::manifest::{ManifestEdits, ModuleType, TYPESCRIPT_SCRIPTS};
use super::{TemplateFile, TemplateId, TemplateSpec};

const TSCONFIG: &str = include_str!("../../templates/shared/tsconfig.json");
const TSCONFIG_STRICT: &str = include_str!("../../templates/shared/tsconfig.strict.json");
const BOT_ENV: &str = include_str!("../../templates/shared/bot.env");
const TS_HANDLE_EVENTS: &str = include_str!("../../templates/shared/handleEvents.ts");
const SERVER_INDEX: &str = include_str!("../../templates/shared/server.js");
const SERVER_ENV: &str = include_str!("../../templates/shared/server.env");

const TS_BOT_SKELETON: &[&str] = &[
    "src",
    "src/handlers",
    "src/commands",
    "src/commands/Dev",
    "src/commands/Feature",
    "src/commands/Fun",
    "src/commands/Misc",
    "src/events",
    "src/structures",
];

const JS_BOT_SKELETON: &[&str] = &[
    "src",
    "src/handlers",
    "src/commands",
    "src/commands/Dev",
    "src/commands/Feature",
    "src/commands/Fun",
    "src/commands/Misc",
    "src/events",
];

const TYPESCRIPT_TOOLCHAIN: &[&str] = &["@types/node", "typescript", "rimraf", "nodemon"];

const TYPESCRIPT_MANIFEST: ManifestEdits = ManifestEdits {
    module_type: ModuleType::Module,
    main: "./dist/index.js",
    scripts: Some(TYPESCRIPT_SCRIPTS),
};

const fn file(path: &'static str, contents: &'static str) -> TemplateFile {
    TemplateFile { path, contents }
}

static SERVER_TS: TemplateSpec = TemplateSpec {
    id: TemplateId::ServerTs,
    skeleton: &["src"],
    dependencies: &["express", "dotenv"],
    dev_dependencies: &["@types/node", "@types/express", "typescript", "rimraf", "nodemon"],
    files: &[
        file("src/index.ts", SERVER_INDEX),
        file(".env", SERVER_ENV),
    ],
    type_config: Some(TSCONFIG),
    manifest: TYPESCRIPT_MANIFEST,
    banner: "Successfully set up ExpressJS using TypeScript!",
};

static SERVER_JS: TemplateSpec = TemplateSpec {
    id: TemplateId::ServerJs,
    skeleton: &["src"],
    dependencies: &["express", "dotenv"],
    dev_dependencies: &[],
    files: &[
        file("src/index.js", SERVER_INDEX),
        file(".env", SERVER_ENV),
    ],
    type_config: None,
    manifest: ManifestEdits {
        module_type: ModuleType::Module,
        main: "./src/index.js",
        scripts: None,
    },
    banner: "Successfully set up an ExpressJS server!",
};

static DISCORD_TS: TemplateSpec = TemplateSpec {
    id: TemplateId::DiscordTs,
    skeleton: TS_BOT_SKELETON,
    dependencies: &["discord.js", "dotenv"],
    dev_dependencies: TYPESCRIPT_TOOLCHAIN,
    files: &[
        file("src/index.ts", include_str!("../../templates/discord-ts/index.ts")),
        file(".env", BOT_ENV),
        file(
            "src/handlers/handleCommands.ts",
            include_str!("../../templates/discord-ts/handleCommands.ts"),
        ),
        file("src/handlers/handleEvents.ts", TS_HANDLE_EVENTS),
        file(
            "src/commands/Misc/ping.ts",
            include_str!("../../templates/discord-ts/ping.ts"),
        ),
        file(
            "src/events/interactionCreate.ts",
            include_str!("../../templates/discord-ts/interactionCreate.ts"),
        ),
        file("src/events/ready.ts", include_str!("../../templates/discord-ts/ready.ts")),
        file(
            "src/structures/Command.ts",
            include_str!("../../templates/discord-ts/Command.ts"),
        ),
        file(
            "src/structures/Event.ts",
            include_str!("../../templates/discord-ts/Event.ts"),
        ),
        file(
            "src/structures/Client.ts",
            include_str!("../../templates/discord-ts/Client.ts"),
        ),
    ],
    type_config: Some(TSCONFIG),
    manifest: TYPESCRIPT_MANIFEST,
    banner: "Successfully set up a discord bot using TypeScript!",
};

static DISCORD_JS: TemplateSpec = TemplateSpec {
    id: TemplateId::DiscordJs,
    skeleton: JS_BOT_SKELETON,
    dependencies: &["discord.js", "dotenv"],
    dev_dependencies: &[],
    files: &[
        file("src/index.js", include_str!("../../templates/discord-js/index.js")),
        file(".env", BOT_ENV),
        file(
            "src/handlers/handleCommands.js",
            include_str!("../../templates/discord-js/handleCommands.js"),
        ),
        file(
            "src/handlers/handleEvents.js",
            include_str!("../../templates/discord-js/handleEvents.js"),
        ),
        file(
            "src/commands/Misc/ping.js",
            include_str!("../../templates/discord-js/ping.js"),
        ),
        file(
            "src/events/interactionCreate.js",
            include_str!("../../templates/discord-js/interactionCreate.js"),
        ),
        file("src/events/ready.js", include_str!("../../templates/discord-js/ready.js")),
    ],
    type_config: None,
    // The discord.js JavaScript stubs use require()
    manifest: ManifestEdits {
        module_type: ModuleType::CommonJs,
        main: "./src/index.js",
        scripts: None,
    },
    banner: "Successfully set up a discord bot using JavaScript!",
};

static OCEANIC_TS: TemplateSpec = TemplateSpec {
    id: TemplateId::OceanicTs,
    skeleton: TS_BOT_SKELETON,
    dependencies: &["oceanic.js", "dotenv", "better-sqlite3"],
    dev_dependencies: &[
        "@types/better-sqlite3",
        "@types/node",
        "typescript",
        "rimraf",
        "nodemon",
    ],
    files: &[
        file("src/index.ts", include_str!("../../templates/oceanic-ts/index.ts")),
        file(".env", BOT_ENV),
        file(
            "src/handlers/handleCommands.ts",
            include_str!("../../templates/oceanic-ts/handleCommands.ts"),
        ),
        file("src/handlers/handleEvents.ts", TS_HANDLE_EVENTS),
        file(
            "src/commands/Misc/ping.ts",
            include_str!("../../templates/oceanic-ts/ping.ts"),
        ),
        file(
            "src/events/interactionCreate.ts",
            include_str!("../../templates/oceanic-ts/interactionCreate.ts"),
        ),
        file("src/events/ready.ts", include_str!("../../templates/oceanic-ts/ready.ts")),
        file("src/events/error.ts", include_str!("../../templates/oceanic-ts/error.ts")),
        file(
            "src/structures/Command.ts",
            include_str!("../../templates/oceanic-ts/Command.ts"),
        ),
        file(
            "src/structures/Event.ts",
            include_str!("../../templates/oceanic-ts/Event.ts"),
        ),
        file(
            "src/structures/Client.ts",
            include_str!("../../templates/oceanic-ts/Client.ts"),
        ),
    ],
    type_config: Some(TSCONFIG_STRICT),
    manifest: TYPESCRIPT_MANIFEST,
    banner: "Successfully set up a discord bot (Oceanic.js) using TypeScript!",
};

static OCEANIC_JS: TemplateSpec = TemplateSpec {
    id: TemplateId::OceanicJs,
    skeleton: JS_BOT_SKELETON,
    dependencies: &["oceanic.js", "dotenv", "better-sqlite3"],
    dev_dependencies: &["nodemon"],
    files: &[
        file("src/index.js", include_str!("../../templates/oceanic-js/index.js")),
        file(".env", BOT_ENV),
        file(
            "src/handlers/handleCommands.js",
            include_str!("../../templates/oceanic-js/handleCommands.js"),
        ),
        file(
            "src/handlers/handleEvents.js",
            include_str!("../../templates/oceanic-js/handleEvents.js"),
        ),
        file(
            "src/commands/Misc/ping.js",
            include_str!("../../templates/oceanic-js/ping.js"),
        ),
        file(
            "src/events/interactionCreate.js",
            include_str!("../../templates/oceanic-js/interactionCreate.js"),
        ),
        file("src/events/ready.js", include_str!("../../templates/oceanic-js/ready.js")),
        file("src/events/error.js", include_str!("../../templates/oceanic-js/error.js")),
    ],
    type_config: None,
    manifest: ManifestEdits {
        module_type: ModuleType::Module,
        main: "src/index.js",
        scripts: Some(&[("dev", "nodemon src/index.js"), ("start", "node src/index.js")]),
    },
    banner: "Successfully set up a discord bot (Oceanic.js) using JavaScript!",
};

static EMPTY_TS: TemplateSpec = TemplateSpec {
    id: TemplateId::EmptyTs,
    skeleton: &["src"],
    dependencies: &[],
    dev_dependencies: TYPESCRIPT_TOOLCHAIN,
    files: &[file("src/index.ts", include_str!("../../templates/empty/index.ts"))],
    type_config: Some(TSCONFIG),
    manifest: TYPESCRIPT_MANIFEST,
    banner: "Successfully set up a NodeJS project using TypeScript!",
};

static EMPTY_JS: TemplateSpec = TemplateSpec {
    id: TemplateId::EmptyJs,
    skeleton: &["src"],
    dependencies: &[],
    dev_dependencies: &[],
    files: &[file("src/index.js", include_str!("../../templates/empty/index.js"))],
    type_config: None,
    manifest: ManifestEdits {
        module_type: ModuleType::CommonJs,
        main: "./src/index.js",
        scripts: None,
    },
    banner: "Successfully set up a NodeJS project using JavaScript!",
};

pub(super) fn lookup(id: TemplateId) -> &'static TemplateSpec {
    match id {
        TemplateId::ServerTs => &SERVER_TS,
        TemplateId::ServerJs => &SERVER_JS,
        TemplateId::DiscordTs => &DISCORD_TS,
        TemplateId::DiscordJs => &DISCORD_JS,
        TemplateId::OceanicTs => &OCEANIC_TS,
        TemplateId::OceanicJs => &OCEANIC_JS,
        TemplateId::EmptyTs => &EMPTY_TS,
        TemplateId::EmptyJs => &EMPTY_JS,
    }
}
