use serde::Deserialize;

#[derive(Deserialize, Debug)]
pub struct SearchRepos {
    pub total_count: u64,
    pub incomplete_results: bool,
    pub items: Vec<Repo>,
}

#[derive(Deserialize, Debug)]
pub struct Repo {
    pub id: u64,
    pub name: String,
    pub language: Option<String>,
    pub stargazers_count: u64,
    pub forks_count: u64,
    pub description: Option<String>,
}

impl From<Repo> for trends::RepositoryRecord {
    fn from(repo: Repo) -> Self {
        trends::RepositoryRecord {
            id: repo.id,
            name: repo.name,
            language: repo.language,
            stargazers_count: repo.stargazers_count,
            forks_count: repo.forks_count,
            description: repo.description,
        }
    }
}

impl From<SearchRepos> for trends::SearchPage {
    fn from(body: SearchRepos) -> Self {
        trends::SearchPage {
            total_count: body.total_count,
            incomplete_results: body.incomplete_results,
            items: body.items.into_iter().map(trends::RepositoryRecord::from).collect(),
        }
    }
}
