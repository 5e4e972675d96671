use argon2::{
    Argon2, PasswordHasher,
    password_hash::{SaltString, rand_core::OsRng},
};
use sea_orm::{
    ActiveValue::NotSet, DatabaseConnection, EntityTrait, Set, sea_query::OnConflict,
};
use starwars_blog_api::{
    config::AppConfig,
    db::{create_orm_conn, run_migrations},
    entity::{Characters, Planets, Users, characters, planets, users},
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(&config.database_url, config.db_max_connections).await?;
    // Ensure migrations are applied.
    run_migrations(&orm).await?;

    seed_users(&orm).await?;
    seed_characters(&orm).await?;
    seed_planets(&orm).await?;

    println!("Seed completed");
    Ok(())
}

fn hash_password(password: &str) -> anyhow::Result<String> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| anyhow::anyhow!(e.to_string()))?
        .to_string();
    Ok(hash)
}

async fn seed_users(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let users = [
        ("luke@rebellion.org", "tatooine", true),
        ("leia@rebellion.org", "alderaan", true),
        ("han@falcon.net", "kessel-run", false),
    ];

    for (email, password, is_active) in users {
        let row = users::ActiveModel {
            id: NotSet,
            email: Set(email.to_string()),
            password: Set(hash_password(password)?),
            is_active: Set(is_active),
        };
        let inserted = Users::insert(row)
            .on_conflict(
                OnConflict::column(users::Column::Email)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(orm)
            .await?;
        println!("Ensured user {email} (inserted={inserted})");
    }

    Ok(())
}

async fn seed_characters(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let characters = [
        ("Luke Skywalker", "male", "blue"),
        ("Leia Organa", "female", "brown"),
        ("Darth Vader", "male", "yellow"),
        ("R2-D2", "n/a", "red"),
    ];

    for (name, gender, eye_color) in characters {
        let row = characters::ActiveModel {
            id: NotSet,
            name: Set(name.to_string()),
            gender: Set(gender.to_string()),
            eye_color: Set(eye_color.to_string()),
        };
        Characters::insert(row)
            .on_conflict(
                OnConflict::column(characters::Column::Name)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(orm)
            .await?;
    }

    println!("Seeded characters");
    Ok(())
}

async fn seed_planets(orm: &DatabaseConnection) -> anyhow::Result<()> {
    let planets = [
        ("Tatooine", Some("10465"), Some("1 standard")),
        ("Alderaan", Some("12500"), Some("1 standard")),
        ("Hoth", Some("7200"), Some("1.1 standard")),
        ("Dagobah", Some("8900"), None),
    ];

    for (planet_name, diameter, gravity) in planets {
        let row = planets::ActiveModel {
            id: NotSet,
            planet_name: Set(planet_name.to_string()),
            diameter: Set(diameter.map(str::to_string)),
            gravity: Set(gravity.map(str::to_string)),
        };
        Planets::insert(row)
            .on_conflict(
                OnConflict::column(planets::Column::PlanetName)
                    .do_nothing()
                    .to_owned(),
            )
            .exec_without_returning(orm)
            .await?;
    }

    println!("Seeded planets");
    Ok(())
}
