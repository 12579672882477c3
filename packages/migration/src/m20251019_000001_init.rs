use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_query::{ColumnDef, ForeignKeyAction, Index, Table};

#[derive(DeriveMigrationName)]
pub struct Migration;

// ----- Iden enums for tables & columns -----
#[derive(Iden)]
enum Console {
    Table,
    Id,
    Name,
}

#[derive(Iden)]
enum Game {
    Table,
    Id,
    Title,
    ConsoleId,
}

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // console
        manager
            .create_table(
                Table::create()
                    .table(Console::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Console::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Console::Name).string().not_null())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_console_name")
                    .table(Console::Table)
                    .col(Console::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // game
        manager
            .create_table(
                Table::create()
                    .table(Game::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Game::Id)
                            .big_integer()
                            .not_null()
                            .primary_key()
                            .auto_increment(),
                    )
                    .col(ColumnDef::new(Game::Title).string().not_null())
                    .col(ColumnDef::new(Game::ConsoleId).big_integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_console_id")
                            .from(Game::Table, Game::ConsoleId)
                            .to(Console::Table, Console::Id)
                            .on_delete(ForeignKeyAction::Restrict),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ux_game_title")
                    .table(Game::Table)
                    .col(Game::Title)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("ix_game_console_id")
                    .table(Game::Table)
                    .col(Game::ConsoleId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // drop in reverse order + drop index before table
        manager
            .drop_index(
                Index::drop()
                    .name("ix_game_console_id")
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_game_title")
                    .table(Game::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Game::Table).if_exists().to_owned())
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name("ux_console_name")
                    .table(Console::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Console::Table).if_exists().to_owned())
            .await?;

        Ok(())
    }
}
