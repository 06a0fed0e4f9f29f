use super::{DependencyNouns, ErrorMessages, Messages, ParameterLabels, SummaryMessages};

pub(super) static MESSAGES: Messages = Messages {
    steps: &[
        "Validation des paramètres du service",
        "Validation de la version de JIRA",
        "Lecture du fichier CSV",
        "Validation de la syntaxe des changements",
        "Validation de la chronologie et constance de la PKEY",
        "Collection des données requises pour les tickets",
        "Validation des statuts requis",
        "Validation des priorités requises",
        "Validation des résolutions requises",
        "Validation des types requis",
        "Validation des champs personnalisés requis",
        "Validation des utilisateurs requis",
        "Rapprochement des identifiants",
        "Calcul des changements",
        "Calcul des étiquettes de fin",
        "Calcul des types de workflow",
        "Validation des statuts de workflow",
        "Validation des statuts des resolutions",
        "Calcul des nouveaux composants",
        "Calcul des nouvelles versions",
        "Calcul des tickets à mettre à jour",
        "Création des nouveaux composants",
        "Création des nouvelles versions",
        "Création des tickets",
        "Association des composants et des versions",
        "Valorisation des champs personnalisés",
        "Association des étiquettes",
        "Création des historiques des statuts",
        "Synchronisation du cache et de l'index de JIRA",
    ],
    import_succeed: "Import réussi, '{0}' changements",
    import_failed: "Import échoué",
    export: "Exporter",
    url_pkey: "Page d'accueil JIRA de ce projet",
    csv: "Données simples, format CSV (;)",
    sla_xls: "SLA, format Excel 2003+",
    sla_csv: "SLA et peu de données, format CSV (;)",
    sla_csv_full: "SLA et données, format CSV (;) (long)",
    sla_csv_status: "Historique des statuts, format CSV (;)",
    import: "Importer historique en CSV (;)",
    pkey: "Clé",
    status: "<span style=\"color: {0}\">&#9679;</span>&nbsp;Non résolues<br>{1} : {2}/{3} ({4}%)<br>Cliquer pour voir les tickets.",
    priorities: "Tickets non résolus par priorité",
    name: "Nom",
    help: "Aide",
    jira_database_success: "Connexion validée, version détectée est {0}",
    jira_project_success: "Projet {0}",
    jira_admin_success: "Accès administrateur réussi",
    parameters: ParameterLabels {
        url: "URL de base",
        user: "Utilisateur de la console",
        password: "Mot de passe de la console",
        project: "Identifiant du projet",
        jdbc_url: "URL JDBC",
        jdbc_user: "Utilisateur JDBC",
        jdbc_password: "Mot de passe JDBC",
        jdbc_driver: "Classe du driver JDBC",
    },
    error: ErrorMessages {
        jira_database: "Connexion échouée : {0}",
        jira_project: "Invalide PKEY ou id",
        jira_admin: "Accès administrateur échoué",
    },
    summary: SummaryMessages {
        started: "Démarré",
        ended: "terminé",
        project: "Projet",
        changes: "Tickets : {0} changements",
        for_issues: "pour {0} tickets",
        required: "Dépendances requises",
        imported: "Dépendances importées",
        new: "Nouvelles dépendances",
        done_full: "Terminé",
        done_valid: "Fichier valide",
        jira_admin_alert: "L'accès administrateur JIRA est requis pour synchroniser le cache de JIRA",
        script_runner_alert: "Le plugin ScriptRunner n'est pas installé, le cache de JIRA n'a pas été synchronisé",
        jira_cache_alert: "Le cache de JIRA n'a pas été synchronisé, une réindexation de JIRA est nécessaire",
    },
    dependencies: DependencyNouns {
        priorities: "priorités",
        statuses: "statuts",
        types: "types",
        resolutions: "résolutions",
        users: "utilisateurs",
        custom_fields: "champs personnalisés",
        components: "composants",
        versions: "versions",
        labels: "étiquettes",
        issues: "tickets",
    },
    short_datetime: "%d/%m/%Y %H:%M",
};
