//! Migration: Create user_attributes table.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UserAttributes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(UserAttributes::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(UserAttributes::UserId).string().not_null())
                    .col(ColumnDef::new(UserAttributes::Name).string().not_null())
                    .col(ColumnDef::new(UserAttributes::Value).string().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_user_attributes_user_id")
                            .from(UserAttributes::Table, UserAttributes::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One value per attribute name and user
        manager
            .create_index(
                Index::create()
                    .name("idx_user_attributes_user_name")
                    .table(UserAttributes::Table)
                    .col(UserAttributes::UserId)
                    .col(UserAttributes::Name)
                    .unique()
                    .to_owned(),
            )
            .await?;

        // Attribute search
        manager
            .create_index(
                Index::create()
                    .name("idx_user_attributes_name_value")
                    .table(UserAttributes::Table)
                    .col(UserAttributes::Name)
                    .col(UserAttributes::Value)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UserAttributes::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum UserAttributes {
    Table,
    Id,
    UserId,
    Name,
    Value,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
