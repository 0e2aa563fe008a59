//! Sidebar navigation entries and their labels.
//!
//! The main sidebar's entries are a fixed list per [`Role`]; the project
//! sidebar's entries are built from the project id and [`PROJECT_SUBPAGES`].

use crate::route::PROJECT_SUBPAGES;
use crate::session::Role;

/// Every label shown in the dashboard chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Label {
    AppName,
    Dashboard,
    Projects,
    NewProject,
    Users,
    Statistics,
    Overview,
    Tasks,
    Members,
    Edit,
    Export,
    Activity,
    Notifications,
    Messages,
    Login,
    Logout,
    Loading,
    Unauthorized,
    NotFound,
    SwitchLanguage,
    ToggleSidebar,
    Email,
    Password,
    LoginFailed,
    Name,
    Description,
    Create,
    Status,
    Progress,
    Assignee,
    Unassigned,
    Role,
    NoProjects,
    NoTasks,
    NoMembers,
    EmptySection,
    LoadFailed,
    TotalProjects,
    ActiveProjects,
    TotalTasks,
    CompletedTasks,
    TotalUsers,
    CompletionRate,
    BackHome,
}

impl Label {
    /// Text for `language_code`. Unknown languages use English.
    #[must_use]
    pub fn text(self, language_code: &str) -> &'static str {
        if language_code == "ar" {
            self.arabic()
        } else {
            self.english()
        }
    }

    fn english(self) -> &'static str {
        match self {
            Self::AppName => "Taskboard",
            Self::Dashboard => "Dashboard",
            Self::Projects => "Projects",
            Self::NewProject => "New project",
            Self::Users => "Users",
            Self::Statistics => "Statistics",
            Self::Overview => "Overview",
            Self::Tasks => "Tasks",
            Self::Members => "Members",
            Self::Edit => "Settings",
            Self::Export => "Export",
            Self::Activity => "Activity",
            Self::Notifications => "Notifications",
            Self::Messages => "Messages",
            Self::Login => "Log in",
            Self::Logout => "Log out",
            Self::Loading => "Loading...",
            Self::Unauthorized => "You are not allowed to view this page.",
            Self::NotFound => "Page not found.",
            Self::SwitchLanguage => "العربية",
            Self::ToggleSidebar => "Toggle navigation",
            Self::Email => "Email",
            Self::Password => "Password",
            Self::LoginFailed => "Incorrect email or password.",
            Self::Name => "Name",
            Self::Description => "Description",
            Self::Create => "Create",
            Self::Status => "Status",
            Self::Progress => "Progress",
            Self::Assignee => "Assignee",
            Self::Unassigned => "Unassigned",
            Self::Role => "Role",
            Self::NoProjects => "No projects yet.",
            Self::NoTasks => "No tasks yet.",
            Self::NoMembers => "No members yet.",
            Self::EmptySection => "Nothing here yet.",
            Self::LoadFailed => "Could not load data.",
            Self::TotalProjects => "Total projects",
            Self::ActiveProjects => "Active projects",
            Self::TotalTasks => "Total tasks",
            Self::CompletedTasks => "Completed tasks",
            Self::TotalUsers => "Total users",
            Self::CompletionRate => "Completion rate",
            Self::BackHome => "Back to dashboard",
        }
    }

    fn arabic(self) -> &'static str {
        match self {
            Self::AppName => "لوحة المهام",
            Self::Dashboard => "لوحة التحكم",
            Self::Projects => "المشاريع",
            Self::NewProject => "مشروع جديد",
            Self::Users => "المستخدمون",
            Self::Statistics => "الإحصائيات",
            Self::Overview => "نظرة عامة",
            Self::Tasks => "المهام",
            Self::Members => "الأعضاء",
            Self::Edit => "الإعدادات",
            Self::Export => "تصدير",
            Self::Activity => "النشاط",
            Self::Notifications => "الإشعارات",
            Self::Messages => "الرسائل",
            Self::Login => "تسجيل الدخول",
            Self::Logout => "تسجيل الخروج",
            Self::Loading => "جارٍ التحميل...",
            Self::Unauthorized => "لا تملك صلاحية عرض هذه الصفحة.",
            Self::NotFound => "الصفحة غير موجودة.",
            Self::SwitchLanguage => "English",
            Self::ToggleSidebar => "إظهار القائمة",
            Self::Email => "البريد الإلكتروني",
            Self::Password => "كلمة المرور",
            Self::LoginFailed => "البريد الإلكتروني أو كلمة المرور غير صحيحة.",
            Self::Name => "الاسم",
            Self::Description => "الوصف",
            Self::Create => "إنشاء",
            Self::Status => "الحالة",
            Self::Progress => "التقدم",
            Self::Assignee => "المسؤول",
            Self::Unassigned => "غير مسند",
            Self::Role => "الدور",
            Self::NoProjects => "لا توجد مشاريع بعد.",
            Self::NoTasks => "لا توجد مهام بعد.",
            Self::NoMembers => "لا يوجد أعضاء بعد.",
            Self::EmptySection => "لا يوجد محتوى بعد.",
            Self::LoadFailed => "تعذر تحميل البيانات.",
            Self::TotalProjects => "إجمالي المشاريع",
            Self::ActiveProjects => "المشاريع النشطة",
            Self::TotalTasks => "إجمالي المهام",
            Self::CompletedTasks => "المهام المكتملة",
            Self::TotalUsers => "إجمالي المستخدمين",
            Self::CompletionRate => "نسبة الإنجاز",
            Self::BackHome => "العودة إلى لوحة التحكم",
        }
    }

    /// Label of a project subpage from [`PROJECT_SUBPAGES`].
    fn for_subpage(subpage: &str) -> Option<Self> {
        match subpage {
            "tasks" => Some(Self::Tasks),
            "users" => Some(Self::Members),
            "edit" => Some(Self::Edit),
            "export" => Some(Self::Export),
            "activity" => Some(Self::Activity),
            "notifications" => Some(Self::Notifications),
            "messages" => Some(Self::Messages),
            _ => None,
        }
    }
}

/// A main sidebar link.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavEntry {
    pub label: Label,
    pub path: &'static str,
}

const USER_NAVIGATION: &[NavEntry] = &[
    NavEntry { label: Label::Dashboard, path: "/" },
    NavEntry { label: Label::Projects, path: "/projects" },
    NavEntry { label: Label::NewProject, path: "/projects/create" },
];

const ADMIN_NAVIGATION: &[NavEntry] = &[
    NavEntry { label: Label::Dashboard, path: "/" },
    NavEntry { label: Label::Projects, path: "/projects" },
    NavEntry { label: Label::NewProject, path: "/projects/create" },
    NavEntry { label: Label::Users, path: "/admin/users" },
    NavEntry { label: Label::Statistics, path: "/admin/statistics" },
];

impl Role {
    /// Main sidebar entries for this role.
    #[must_use]
    pub fn navigation(self) -> &'static [NavEntry] {
        match self {
            Self::User => USER_NAVIGATION,
            Self::Admin => ADMIN_NAVIGATION,
        }
    }
}

/// A project sidebar link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectNavEntry {
    pub label: Label,
    pub path: String,
}

/// Project sidebar entries for `project_id`: the overview, then one entry
/// per project subpage.
#[must_use]
pub fn project_navigation(project_id: &str) -> Vec<ProjectNavEntry> {
    let overview = ProjectNavEntry {
        label: Label::Overview,
        path: format!("/projects/{project_id}"),
    };
    std::iter::once(overview)
        .chain(PROJECT_SUBPAGES.iter().filter_map(|subpage| {
            Label::for_subpage(subpage).map(|label| ProjectNavEntry {
                label,
                path: format!("/projects/{project_id}/{subpage}"),
            })
        }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::route::{classify, RouteClassification};

    #[test]
    fn test_admin_sees_admin_pages() {
        let admin: Vec<_> = Role::Admin.navigation().iter().map(|e| e.path).collect();
        assert!(admin.contains(&"/admin/users"));
        assert!(admin.contains(&"/admin/statistics"));

        assert!(Role::User
            .navigation()
            .iter()
            .all(|e| !e.path.starts_with("/admin")));
    }

    #[test]
    fn test_main_navigation_is_never_project_scoped() {
        for role in [Role::User, Role::Admin] {
            for entry in role.navigation() {
                assert_eq!(classify(entry.path), RouteClassification::Global, "{}", entry.path);
            }
        }
    }

    #[test]
    fn test_every_project_link_keeps_project_chrome() {
        let entries = project_navigation("42");
        assert_eq!(entries.len(), PROJECT_SUBPAGES.len() + 1);
        assert_eq!(entries[0].label, Label::Overview);
        for entry in &entries {
            assert_eq!(classify(&entry.path).project_id(), Some("42"), "{}", entry.path);
        }
    }

    #[test]
    fn test_labels_follow_language() {
        assert_eq!(Label::Projects.text("en"), "Projects");
        assert_eq!(Label::Projects.text("ar"), "المشاريع");
        assert_eq!(Label::Projects.text("fr"), "Projects");
    }
}
