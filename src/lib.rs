pub mod application;
pub mod connector;
pub mod domain;

pub use application::{
    AuthenticateUserUseCase, Database, GetUserInfoUseCase, ListUsersUseCase, RegisterUserUseCase,
    UserRepository, MIN_PASSWORD_LEN,
};

pub use connector::{InMemoryUserStorage, StubDatabase};

pub use domain::{
    calculate_total, format_output, process_user_data, validate_input, AgeValue, DomainError,
    LineItem, ProcessedUser, QueryRow, RawUserData, User,
};
